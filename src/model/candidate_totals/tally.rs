use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::election::CandidateId;

/// Vote counts keyed by candidate ID.
///
/// Entries only exist for candidates that have received at least one vote;
/// everyone else implicitly has zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteTally {
    counts: HashMap<CandidateId, u64>,
}

impl VoteTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Votes recorded for the given candidate, zero if none.
    pub fn votes_for(&self, candidate_id: &str) -> u64 {
        self.counts.get(candidate_id).copied().unwrap_or(0)
    }

    /// Sum of all recorded votes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Return a new tally with one extra vote for `candidate_id`.
    /// `self` is left untouched.
    pub fn with_vote(&self, candidate_id: &str) -> Self {
        let mut counts = self.counts.clone();
        let count = counts.entry(candidate_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        Self { counts }
    }
}

impl Deref for VoteTally {
    type Target = HashMap<CandidateId, u64>;

    fn deref(&self) -> &Self::Target {
        &self.counts
    }
}

impl FromIterator<(CandidateId, u64)> for VoteTally {
    fn from_iter<T: IntoIterator<Item = (CandidateId, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Loosely-typed counterpart of [`VoteTally::with_vote`].
///
/// Anything other than a JSON object is treated as an empty tally. Integer
/// counts stay integers; any other finite number, such as `2.0` or `1.5`, is
/// incremented as a float. Absent or non-numeric entries start from zero. The
/// input is never modified; a fresh map is returned.
pub fn tally_pure(tally: &Value, candidate_id: &str) -> Map<String, Value> {
    let mut updated = tally.as_object().cloned().unwrap_or_default();
    let previous = updated.get(candidate_id);
    let next = match previous.and_then(Value::as_u64) {
        Some(count) => Value::from(count.saturating_add(1)),
        None => match previous.and_then(Value::as_f64).filter(|v| v.is_finite()) {
            Some(count) => Value::from(count + 1.0),
            None => Value::from(1),
        },
    };
    updated.insert(candidate_id.to_string(), next);
    updated
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn with_vote_leaves_original_alone() {
        let original: VoteTally = vec![("a".to_string(), 1)].into_iter().collect();
        let updated = original.with_vote("a");

        assert_eq!(original.votes_for("a"), 1);
        assert_eq!(updated.votes_for("a"), 2);
        assert_ne!(original, updated);
    }

    #[test]
    fn with_vote_creates_missing_entries() {
        let tally = VoteTally::new().with_vote("b").with_vote("c").with_vote("b");
        assert_eq!(tally.votes_for("b"), 2);
        assert_eq!(tally.votes_for("c"), 1);
        assert_eq!(tally.votes_for("nobody"), 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn loose_tally_increments_copy() {
        let original = json!({"a": 1});
        let updated = tally_pure(&original, "a");

        assert_eq!(Value::Object(updated), json!({"a": 2}));
        assert_eq!(original, json!({"a": 1}));
    }

    #[test]
    fn loose_tally_keeps_other_entries() {
        let updated = tally_pure(&json!({"a": 4, "b": 7}), "c");
        assert_eq!(Value::Object(updated), json!({"a": 4, "b": 7, "c": 1}));
    }

    #[test]
    fn loose_tally_tolerates_garbage() {
        for not_a_map in [json!(null), json!(3), json!("tally"), json!([1, 2])] {
            assert_eq!(Value::Object(tally_pure(&not_a_map, "x")), json!({"x": 1}));
        }
        // Non-numeric counts restart from zero.
        assert_eq!(
            Value::Object(tally_pure(&json!({"x": "lots"}), "x")),
            json!({"x": 1})
        );
    }

    #[test]
    fn loose_tally_keeps_fractional_counts() {
        let count = |tally: Value| tally_pure(&tally, "a")["a"].as_f64();

        // Whole numbers written as floats are still counts.
        assert_eq!(count(json!({"a": 2.0})), Some(3.0));
        assert_eq!(count(json!({"a": 1.5})), Some(2.5));
        assert_eq!(count(json!({"a": -1})), Some(0.0));

        // Integer counts stay integers.
        assert!(tally_pure(&json!({"a": 2}), "a")["a"].is_u64());
    }

    #[test]
    fn tally_serializes_as_plain_map() {
        let tally = VoteTally::new().with_vote("a");
        assert_eq!(serde_json::to_value(&tally).unwrap(), json!({"a": 1}));
    }
}
