use std::cmp::Ordering;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::election::CandidateResult;

/// File consulted for configuration, relative to the working directory.
pub const CONFIG_FILE: &str = "Tally.toml";

/// Prefix of environment variables that override the config file.
pub const ENV_PREFIX: &str = "TALLY_";

/// How results are ordered when printed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsOrder {
    /// Most votes first.
    #[default]
    Votes,
    /// Alphabetical by candidate name.
    Name,
}

impl ResultsOrder {
    /// Compare two results under this ordering.
    pub fn compare(self, a: &CandidateResult, b: &CandidateResult) -> Ordering {
        match self {
            Self::Votes => CandidateResult::by_votes_descending(a, b),
            Self::Name => CandidateResult::by_name(a, b),
        }
    }
}

/// Application configuration, derived from built-in defaults, `Tally.toml`
/// and `TALLY_*` environment variables, in increasing order of precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    log_config: String,
    order: ResultsOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_config: "log4rs.yaml".to_string(),
            order: ResultsOrder::default(),
        }
    }
}

impl Config {
    /// Load the layered configuration.
    pub fn load() -> Result<Self> {
        let config = Self::figment().extract()?;
        Ok(config)
    }

    /// The provider stack, exposed so callers can merge their own overrides.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Path of the log4rs configuration file.
    /// Configured via `TALLY_LOG_CONFIG`.
    pub fn log_config(&self) -> &str {
        &self.log_config
    }

    /// Default ordering of printed results.
    /// Configured via `TALLY_ORDER`.
    pub fn order(&self) -> ResultsOrder {
        self.order
    }

    /// Override the results ordering, e.g. from a command-line flag.
    pub fn set_order(&mut self, order: ResultsOrder) {
        self.order = order;
    }
}
