//! Capability contracts implemented by composition.
//!
//! An entity satisfies a capability by embedding the backing store
//! ([`VoteLedger`], [`Description`]) and exposing it through the accessor
//! pair; the query methods are derived from that.

use crate::error::DomainResult;
use crate::models::{Description, Vote, VoteLedger};

/// Capability for entities that can receive and query votes.
pub trait Votable {
    fn ledger(&self) -> &VoteLedger;
    fn ledger_mut(&mut self) -> &mut VoteLedger;

    /// Count a vote, rejecting a second vote by the same user.
    fn add_vote(&mut self, vote: Vote) -> DomainResult<()> {
        self.ledger_mut().add(vote)
    }

    /// All counted votes in insertion order.
    fn votes(&self) -> &[Vote] {
        self.ledger().all()
    }

    fn positive_votes(&self) -> Vec<&Vote> {
        self.ledger().positive()
    }

    fn negative_votes(&self) -> Vec<&Vote> {
        self.ledger().negative()
    }

    /// Positive minus negative votes, derived from live vote state.
    fn net_score(&self) -> i64 {
        self.ledger().net_score()
    }
}

/// Capability for entities carrying a mutable text description.
pub trait Describable {
    fn description_holder(&self) -> &Description;
    fn description_holder_mut(&mut self) -> &mut Description;

    fn description(&self) -> &str {
        self.description_holder().get()
    }

    fn set_description(&mut self, text: impl Into<String>) {
        self.description_holder_mut().set(text);
    }
}
