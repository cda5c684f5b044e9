pub use tally::{tally_pure, VoteTally};

mod tally;
