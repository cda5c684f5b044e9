#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::{Config, ResultsOrder};
pub use error::{Error, Result};
pub use model::{
    candidate_totals::{tally_pure, VoteTally},
    election::{Candidate, CandidateResult, ElectionSession, VoteError, VoteReceipt},
    region::{count_votes_in_regions, Region},
    scenario::{Scenario, ScenarioReport},
    voter::{EligibilityRules, Validation, VoteValidator, Voter, VoterState},
};
