pub use candidate::Candidate;
pub use results::{CandidateResult, VoteError, VoteReceipt};
pub use session::ElectionSession;

mod candidate;
mod results;
mod session;

/// Our candidate IDs are strings.
pub type CandidateId = String;
