use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named region carrying its own vote count and any number of sub-regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub votes: u64,
    #[serde(default)]
    pub sub_regions: Vec<Region>,
}

impl Region {
    pub fn new(name: impl Into<String>, votes: u64) -> Self {
        Self {
            name: name.into(),
            votes,
            sub_regions: Vec::new(),
        }
    }

    pub fn with_sub_regions(mut self, sub_regions: Vec<Region>) -> Self {
        self.sub_regions = sub_regions;
        self
    }

    /// Votes in this region and every region beneath it.
    pub fn total_votes(&self) -> u64 {
        let mut total: u64 = 0;
        let mut pending = vec![self];
        while let Some(region) = pending.pop() {
            total = total.saturating_add(region.votes);
            pending.extend(region.sub_regions.iter());
        }
        total
    }
}

/// Sum the votes of a loosely-typed region tree.
///
/// Anything that is not a JSON object contributes nothing. A node's `votes`
/// counts only if it is a number, and `subRegions` is only descended into if
/// it is an array. Traversal uses an explicit stack, so depth is bounded only
/// by memory.
pub fn count_votes_in_regions(region: &Value) -> f64 {
    let mut total = 0.0;
    let mut pending = vec![region];
    while let Some(node) = pending.pop() {
        let fields = match node.as_object() {
            Some(fields) => fields,
            None => continue,
        };
        total += fields
            .get("votes")
            .and_then(Value::as_f64)
            .filter(|votes| votes.is_finite())
            .unwrap_or(0.0);
        if let Some(Value::Array(sub_regions)) = fields.get("subRegions") {
            pending.extend(sub_regions.iter());
        }
    }
    total
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Region {
        pub fn example() -> Self {
            Region::new("V", 5).with_sub_regions(vec![Region::new("H1", 3), Region::new("H2", 2)])
        }
    }
}
