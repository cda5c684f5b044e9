use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::ResultsOrder,
    error::{Error, Result},
    model::{
        election::{Candidate, CandidateId, CandidateResult, ElectionSession, VoteError, VoteReceipt},
        region::count_votes_in_regions,
        voter::{EligibilityRules, Validation, VoteValidator, VoterId},
    },
};

/// A ballot that a voter wishes to cast for a specific candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotSpec {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

/// A complete election to replay: who stands, who turns up, and how they vote.
///
/// Scenario files are parsed with `serde_json`'s nesting limit of 128, so a
/// `regions` tree nested deeper than that fails to load with
/// [`Error::Json`]. Pass such trees to [`count_votes_in_regions`] directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Scenario name, for display only.
    #[serde(default)]
    pub name: String,
    pub candidates: Vec<Candidate>,
    /// Voter records, kept as raw JSON so malformed ones are refused at
    /// registration rather than at load time.
    #[serde(default)]
    pub voters: Vec<Value>,
    /// Ballots, replayed in order after every voter has been processed.
    #[serde(default)]
    pub ballots: Vec<BallotSpec>,
    /// Optional region tree whose votes are totalled separately.
    #[serde(default)]
    pub regions: Option<Value>,
    /// Optional extra eligibility rules applied before registration.
    #[serde(default)]
    pub eligibility: Option<EligibilityRules>,
}

/// A ballot the session refused, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedBallot {
    pub ballot: BallotSpec,
    pub reason: VoteError,
}

/// Everything that happened while replaying a scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub name: String,
    /// Voters successfully registered.
    pub registered: usize,
    /// Voter records refused, whether by the eligibility rules or by the session.
    pub refused: usize,
    /// Eligibility outcome for each voter record, in order. Empty without rules.
    pub eligibility: Vec<Validation>,
    pub accepted: Vec<VoteReceipt>,
    pub rejected: Vec<RejectedBallot>,
    pub results: Vec<CandidateResult>,
    pub winner: Option<Candidate>,
    /// Sum over the region tree, if one was given.
    pub regional_votes: Option<f64>,
}

impl Scenario {
    /// Load and check a scenario from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = BufReader::new(File::open(path)?);
        let scenario: Self = serde_json::from_reader(file)?;
        scenario.check()
    }

    /// Load and check a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.check()
    }

    /// Reject scenarios whose candidate list is ambiguous.
    fn check(self) -> Result<Self> {
        let mut seen = HashSet::with_capacity(self.candidates.len());
        for candidate in self.candidates.iter() {
            if !seen.insert(candidate.id.as_str()) {
                return Err(Error::BadScenario(format!(
                    "Duplicate candidate ID '{}'",
                    candidate.id
                )));
            }
        }
        Ok(self)
    }

    /// Replay the scenario through a fresh [`ElectionSession`].
    ///
    /// If eligibility rules are present, voters failing them are never offered
    /// to the session.
    pub fn run(&self, order: ResultsOrder) -> ScenarioReport {
        let mut session = ElectionSession::new(&self.candidates);
        let validator = self.eligibility.clone().map(VoteValidator::new);

        let mut eligibility = Vec::new();
        let mut registered = 0;
        for voter in self.voters.iter() {
            let eligible = match &validator {
                Some(validator) => {
                    let validation = validator.validate(voter);
                    let valid = validation.valid;
                    eligibility.push(validation);
                    valid
                }
                None => true,
            };
            if eligible && session.register_voter_value(voter) {
                registered += 1;
            }
        }

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for ballot in self.ballots.iter() {
            match session.cast_vote(&ballot.voter_id, &ballot.candidate_id) {
                Ok(receipt) => accepted.push(receipt),
                Err(reason) => rejected.push(RejectedBallot {
                    ballot: ballot.clone(),
                    reason,
                }),
            }
        }
        info!(
            "{} replayed '{}': {} of {} ballots accepted",
            session.id(),
            self.name,
            accepted.len(),
            self.ballots.len()
        );

        ScenarioReport {
            name: self.name.clone(),
            registered,
            refused: self.voters.len() - registered,
            eligibility,
            accepted,
            rejected,
            results: session.results_by(|a, b| order.compare(a, b)),
            winner: session.winner().cloned(),
            regional_votes: self.regions.as_ref().map(count_votes_in_regions),
        }
    }
}
