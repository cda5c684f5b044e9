use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Candidate, CandidateId};
use crate::model::voter::VoterId;

/// Proof of a successfully cast vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

/// Why a vote was refused. Checks happen in declaration order and the first
/// failure wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteError {
    #[error("voter_not_registered")]
    VoterNotRegistered,
    #[error("candidate_not_found")]
    CandidateNotFound,
    #[error("already_voted")]
    AlreadyVoted,
}

impl VoteError {
    /// The stable reason code for this error.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::VoterNotRegistered => "voter_not_registered",
            Self::CandidateNotFound => "candidate_not_found",
            Self::AlreadyVoted => "already_voted",
        }
    }
}

/// A candidate together with the votes they received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl CandidateResult {
    pub fn new(candidate: &Candidate, votes: u64) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes,
        }
    }

    /// Default results ordering: most votes first.
    pub fn by_votes_descending(a: &Self, b: &Self) -> Ordering {
        b.votes.cmp(&a.votes)
    }

    /// Alphabetical by name, then by ID.
    pub fn by_name(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
    }
}

impl Display for CandidateResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} vote{}",
            self.name,
            self.party,
            self.votes,
            if self.votes != 1 { "s" } else { "" }
        )
    }
}
