use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// One user's approval or disapproval of a single target.
///
/// The caster is fixed at construction; polarity stays mutable so an already
/// counted vote can be flipped in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub user_id: Uuid,
    is_positive: bool,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(user_id: Uuid, is_positive: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            is_positive,
            created_at: Utc::now(),
        }
    }

    pub fn is_like(&self) -> bool {
        self.is_positive
    }

    pub fn like(&mut self) {
        self.is_positive = true;
    }

    pub fn dislike(&mut self) {
        self.is_positive = false;
    }
}

/// Insertion-ordered collection of the votes counted on one target.
///
/// Enforces one vote per user. The positive and negative views are derived
/// on every call, so they always reflect in-place polarity flips on votes
/// that were counted earlier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteLedger {
    votes: Vec<Vote>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vote, rejecting a second vote by the same user.
    pub fn add(&mut self, vote: Vote) -> DomainResult<()> {
        if self.votes.iter().any(|v| v.user_id == vote.user_id) {
            return Err(DomainError::DuplicateVote(vote.user_id));
        }
        self.votes.push(vote);
        Ok(())
    }

    pub fn all(&self) -> &[Vote] {
        &self.votes
    }

    pub fn positive(&self) -> Vec<&Vote> {
        self.votes.iter().filter(|v| v.is_like()).collect()
    }

    pub fn negative(&self) -> Vec<&Vote> {
        self.votes.iter().filter(|v| !v.is_like()).collect()
    }

    pub fn positive_count(&self) -> usize {
        self.votes.iter().filter(|v| v.is_like()).count()
    }

    pub fn negative_count(&self) -> usize {
        self.votes.iter().filter(|v| !v.is_like()).count()
    }

    /// Positive minus negative votes.
    pub fn net_score(&self) -> i64 {
        self.positive_count() as i64 - self.negative_count() as i64
    }

    /// The counted vote cast by `user_id`, if any.
    pub fn by_user_mut(&mut self, user_id: Uuid) -> Option<&mut Vote> {
        self.votes.iter_mut().find(|v| v.user_id == user_id)
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}
