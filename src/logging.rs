use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::LevelFilter;
use log4rs_dynamic_filters::DynamicLevelFilter;

use crate::error::{Error, Result};

/// Name of the dynamic filter (and log target) covering this library.
pub const LIBRARY_TARGET: &str = "civic_tally";

/// A unique identifier for a particular election session, used to tell
/// interleaved log lines apart.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SessionId(pub usize);

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "session{}", self.0)
    }
}

impl SessionId {
    /// Atomically get the next ID. This wraps around back to zero if you somehow exceed a usize.
    pub fn next() -> SessionId {
        static SESSION_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);
        SessionId(SESSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Initialise log4rs from a YAML file, with the dynamic filter kinds registered.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<()> {
    log4rs::init_file(path, log4rs_dynamic_filters::default_deserializers())
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Change the level of the library's dynamic filter at runtime.
/// Only has an effect if the loaded config declares a `dynamic_level` filter
/// named [`LIBRARY_TARGET`]. The shipped `log4rs.yaml` puts that filter on an
/// appender used only by the library's logger, so other targets are unaffected.
pub fn set_library_level(level: LevelFilter) {
    DynamicLevelFilter::set(LIBRARY_TARGET, level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique_and_increasing() {
        let first = SessionId::next();
        let second = SessionId::next();
        assert!(second > first);
        assert_eq!(format!("{}", SessionId(7)), "session7");
    }

    #[test]
    fn shipped_config_filters_only_library_records() {
        let config = log4rs::config::load_config_file(
            "log4rs.yaml",
            log4rs_dynamic_filters::default_deserializers(),
        )
        .unwrap();

        let library = config
            .loggers()
            .iter()
            .find(|logger| logger.name() == LIBRARY_TARGET)
            .unwrap();
        assert!(!library.additive());

        // Every appender the library writes to is filtered; none the root writes to is.
        for appender in config.appenders() {
            let filtered = !appender.filters().is_empty();
            if library.appenders().iter().any(|name| name == appender.name()) {
                assert!(filtered, "{} should be filtered", appender.name());
            }
            if config.root().appenders().iter().any(|name| name == appender.name()) {
                assert!(!filtered, "{} should not be filtered", appender.name());
            }
        }
        assert!(!library.appenders().is_empty());
        assert!(!config.root().appenders().is_empty());
    }
}
