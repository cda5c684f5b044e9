use serde::{Deserialize, Serialize};

use super::CandidateId;

/// A candidate standing in an election. Identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: party.into(),
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Candidate {
        pub fn example1() -> Self {
            Self::new("C1", "Chris Riches", "Quidditch Party")
        }

        pub fn example2() -> Self {
            Self::new("C2", "Parry Hotter", "Moongolf Alliance")
        }

        pub fn example3() -> Self {
            Self::new("C3", "Jane Doe", "Independent")
        }
    }
}
