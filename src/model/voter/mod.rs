pub use eligibility::{
    create_vote_validator, EligibilityRules, Validation, VoteValidator, INVALID_VOTER,
    MISSING_PREFIX, UNDERAGE,
};
pub use voter_core::{is_voting_age, Voter, VoterId, VoterState, MINIMUM_VOTING_AGE};

mod eligibility;
mod voter_core;
