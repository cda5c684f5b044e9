use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::{Candidate, CandidateId, CandidateResult, VoteError, VoteReceipt};
use crate::{
    logging::SessionId,
    model::{
        candidate_totals::VoteTally,
        voter::{is_voting_age, Voter, VoterId, VoterState},
    },
};

/// A single election: a fixed list of candidates, the voters registered for
/// it, and the votes they have cast.
///
/// Registered and voted sets are private; the only way to change them is
/// through [`ElectionSession::register_voter`] and [`ElectionSession::cast_vote`].
/// A voter can only appear in the voted set after being registered, and each
/// tally entry always equals the number of successful votes for that candidate.
#[derive(Debug)]
pub struct ElectionSession {
    /// Identifies this session in log output.
    id: SessionId,
    /// Candidates in their original order, which breaks ties.
    candidates: Vec<Candidate>,
    /// Position in `candidates` by ID.
    candidate_lookup: HashMap<CandidateId, usize>,
    tally: VoteTally,
    registered: HashSet<VoterId>,
    voted: HashSet<VoterId>,
}

impl ElectionSession {
    /// Open a new election over a copy of the given candidates.
    ///
    /// If the same ID appears more than once, lookups by ID find the first entry.
    pub fn new(candidates: &[Candidate]) -> Self {
        let id = SessionId::next();
        let mut candidate_lookup = HashMap::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            candidate_lookup.entry(candidate.id.clone()).or_insert(index);
        }
        info!("{id} opened with {} candidates", candidates.len());

        Self {
            id,
            candidates: candidates.to_vec(),
            candidate_lookup,
            tally: VoteTally::new(),
            registered: HashSet::new(),
            voted: HashSet::new(),
        }
    }

    /// Session identifier used in log output.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Register a voter. Returns false, changing nothing, if they are under
    /// age or their ID is already registered.
    pub fn register_voter(&mut self, voter: &Voter) -> bool {
        self.register(&voter.id, voter.age)
    }

    /// Register a voter given as arbitrary JSON. Anything other than an object
    /// with a string `id` and a numeric `age` is refused.
    pub fn register_voter_value(&mut self, voter: &Value) -> bool {
        match Voter::registration_fields(voter) {
            Some((id, age)) => self.register(id, age),
            None => {
                warn!("{} refused malformed voter record", self.id);
                false
            }
        }
    }

    fn register(&mut self, voter_id: &str, age: f64) -> bool {
        if !is_voting_age(age) {
            warn!("{} refused registration of {voter_id}: ineligible age {age}", self.id);
            return false;
        }
        if !self.registered.insert(voter_id.to_string()) {
            warn!("{} refused registration of {voter_id}: already registered", self.id);
            return false;
        }
        debug!("{} registered {voter_id}", self.id);
        true
    }

    /// Cast `voter_id`'s one and only vote for `candidate_id`.
    ///
    /// Checks, in order, that the voter is registered, that the candidate
    /// exists, and that the voter has not voted yet. The first failing check
    /// decides the error and nothing changes.
    pub fn cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<VoteReceipt, VoteError> {
        if let Err(err) = self.check_vote(voter_id, candidate_id) {
            warn!("{} refused vote by {voter_id} for {candidate_id}: {err}", self.id);
            return Err(err);
        }

        self.tally = self.tally.with_vote(candidate_id);
        self.voted.insert(voter_id.to_string());
        debug!("{} accepted vote by {voter_id} for {candidate_id}", self.id);

        Ok(VoteReceipt {
            voter_id: voter_id.to_string(),
            candidate_id: candidate_id.to_string(),
        })
    }

    fn check_vote(&self, voter_id: &str, candidate_id: &str) -> Result<(), VoteError> {
        if !self.registered.contains(voter_id) {
            return Err(VoteError::VoterNotRegistered);
        }
        if !self.candidate_lookup.contains_key(candidate_id) {
            return Err(VoteError::CandidateNotFound);
        }
        if self.voted.contains(voter_id) {
            return Err(VoteError::AlreadyVoted);
        }
        Ok(())
    }

    /// Results for every candidate, most votes first. Candidates on equal
    /// votes keep their original order.
    pub fn results(&self) -> Vec<CandidateResult> {
        self.results_by(CandidateResult::by_votes_descending)
    }

    /// Results for every candidate, in the order given by `compare`.
    /// A fresh list is built on each call.
    pub fn results_by<F>(&self, compare: F) -> Vec<CandidateResult>
    where
        F: FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    {
        let mut results = self
            .candidates
            .iter()
            .map(|candidate| CandidateResult::new(candidate, self.tally.votes_for(&candidate.id)))
            .collect::<Vec<_>>();
        results.sort_by(compare);
        results
    }

    /// The candidate with strictly the most votes, earliest in the candidate
    /// list on a tie. `None` if nobody has received a vote.
    pub fn winner(&self) -> Option<&Candidate> {
        let mut best: Option<(&Candidate, u64)> = None;
        for candidate in &self.candidates {
            let votes = self.tally.votes_for(&candidate.id);
            if votes > best.map_or(0, |(_, best_votes)| best_votes) {
                best = Some((candidate, votes));
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Candidates in their original order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by ID.
    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidate_lookup
            .get(candidate_id)
            .map(|&index| &self.candidates[index])
    }

    /// Read-only view of the current tally.
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    pub fn is_registered(&self, voter_id: &str) -> bool {
        self.registered.contains(voter_id)
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voted.contains(voter_id)
    }

    /// Where the given voter is in this election's lifecycle.
    pub fn voter_state(&self, voter_id: &str) -> VoterState {
        if self.voted.contains(voter_id) {
            VoterState::Voted
        } else if self.registered.contains(voter_id) {
            VoterState::Registered
        } else {
            VoterState::Unregistered
        }
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of successful votes so far.
    pub fn votes_cast(&self) -> usize {
        self.voted.len()
    }
}
