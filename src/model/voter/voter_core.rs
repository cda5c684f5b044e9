use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Our voter IDs are strings.
pub type VoterId = String;

/// Voters must be at least this old to register for an election.
pub const MINIMUM_VOTING_AGE: f64 = 18.0;

/// Is `age` a real number at or above [`MINIMUM_VOTING_AGE`]?
pub fn is_voting_age(age: f64) -> bool {
    age.is_finite() && age >= MINIMUM_VOTING_AGE
}

/// A prospective voter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    /// Voter unique ID.
    pub id: VoterId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: f64,
}

impl Voter {
    pub fn new(id: impl Into<VoterId>, name: impl Into<String>, age: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Is this voter old enough to register?
    pub fn is_of_age(&self) -> bool {
        is_voting_age(self.age)
    }

    /// Extract the fields registration cares about from an arbitrary JSON value.
    /// Returns `None` unless it is an object with a string `id` and a numeric `age`.
    pub fn registration_fields(value: &Value) -> Option<(&str, f64)> {
        let object = value.as_object()?;
        let id = object.get("id")?.as_str()?;
        let age = object.get("age")?.as_f64()?;
        Some((id, age))
    }
}

/// Where a voter is in the lifecycle of a single election.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoterState {
    /// Not known to the election.
    Unregistered,
    /// Eligible, but has not voted yet.
    Registered,
    /// Has cast their vote. Terminal.
    Voted,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Voter {
        pub fn example1() -> Self {
            Self::new("V1", "Ada Lovelace", 36.0)
        }

        pub fn example2() -> Self {
            Self::new("V2", "Charles Babbage", 79.0)
        }

        pub fn underage_example() -> Self {
            Self::new("V3", "Young Tom", 17.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn age_boundary() {
        assert!(Voter::new("a", "A", 18.0).is_of_age());
        assert!(!Voter::new("b", "B", 17.999).is_of_age());
        assert!(!Voter::new("c", "C", f64::NAN).is_of_age());
        assert!(!Voter::new("d", "D", f64::INFINITY).is_of_age());
        assert!(!Voter::underage_example().is_of_age());
    }

    #[test]
    fn registration_fields_from_json() {
        assert_eq!(
            Voter::registration_fields(&json!({"id": "V1", "age": 30})),
            Some(("V1", 30.0))
        );
        assert_eq!(Voter::registration_fields(&json!({"id": 1, "age": 30})), None);
        assert_eq!(Voter::registration_fields(&json!({"id": "V1", "age": "30"})), None);
        assert_eq!(Voter::registration_fields(&json!({"id": "V1"})), None);
        assert_eq!(Voter::registration_fields(&json!("V1")), None);
        assert_eq!(Voter::registration_fields(&json!(null)), None);
    }

    #[test]
    fn voter_json_shape() {
        let voter: Voter =
            serde_json::from_value(json!({"id": "V1", "name": "Ada Lovelace", "age": 36}))
                .unwrap();
        assert_eq!(voter, Voter::example1());
    }
}
