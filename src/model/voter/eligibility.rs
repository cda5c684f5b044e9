use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Voter;

/// Reason given when the voter is not a JSON object at all.
pub const INVALID_VOTER: &str = "invalid_voter";
/// Reason given when the voter's age is missing, non-numeric or too low.
pub const UNDERAGE: &str = "underage";
/// Prefix of the reason given for an absent required field.
pub const MISSING_PREFIX: &str = "missing_";

/// Declarative eligibility rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityRules {
    /// If finite, voters must be at least this old.
    pub min_age: Option<f64>,
    /// Keys that must be present, checked in order.
    pub required_fields: Vec<String>,
}

/// Outcome of checking one voter against a set of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub reason: Option<String>,
}

impl Validation {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// A reusable eligibility check built from [`EligibilityRules`].
///
/// This is deliberately not wired into [`crate::ElectionSession`]; callers
/// compose it with registration however they like.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteValidator {
    rules: EligibilityRules,
}

impl VoteValidator {
    pub fn new(rules: EligibilityRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EligibilityRules {
        &self.rules
    }

    /// Check a voter-like JSON value.
    ///
    /// Required fields are checked by key only, so `{"age": null}` has an age
    /// as far as presence is concerned. The age check runs afterwards and is
    /// skipped entirely unless `min_age` is finite.
    pub fn validate(&self, voter: &Value) -> Validation {
        let fields = match voter.as_object() {
            Some(fields) => fields,
            None => return Validation::rejected(INVALID_VOTER),
        };

        if let Some(missing) = self
            .rules
            .required_fields
            .iter()
            .find(|field| !fields.contains_key(field.as_str()))
        {
            return Validation::rejected(format!("{MISSING_PREFIX}{missing}"));
        }

        if let Some(min_age) = self.rules.min_age.filter(|age| age.is_finite()) {
            let old_enough = fields
                .get("age")
                .and_then(Value::as_f64)
                .map_or(false, |age| age.is_finite() && age >= min_age);
            if !old_enough {
                return Validation::rejected(UNDERAGE);
            }
        }

        Validation::accepted()
    }

    /// Check a typed voter. Non-finite ages serialize as `null` and so fail any age rule.
    pub fn validate_voter(&self, voter: &Voter) -> Validation {
        match serde_json::to_value(voter) {
            Ok(value) => self.validate(&value),
            Err(_) => Validation::rejected(INVALID_VOTER),
        }
    }
}

/// Build a standalone validation function from a rule set.
pub fn create_vote_validator(rules: EligibilityRules) -> impl Fn(&Value) -> Validation {
    let validator = VoteValidator::new(rules);
    move |voter| validator.validate(voter)
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl EligibilityRules {
        pub fn example() -> Self {
            Self {
                min_age: Some(18.0),
                required_fields: vec!["id".to_string(), "age".to_string()],
            }
        }
    }
}
