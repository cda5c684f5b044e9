//! Election data types and operations.
//!
//! Leaf modules are pure: [`candidate_totals`] produces new tallies,
//! [`region`] sums region trees, and [`voter`] checks eligibility. The one
//! stateful type is [`election::ElectionSession`], built on top of them.
//! [`scenario`] replays a whole election described in JSON.

pub mod candidate_totals;
pub mod election;
pub mod region;
pub mod scenario;
pub mod voter;
