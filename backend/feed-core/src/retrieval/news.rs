use chrono::{DateTime, Utc};
use social_core::{SocialGraph, User};
use uuid::Uuid;

use super::{RetrievalKind, RetrievalStrategy};

/// Pool questions created on the evaluation date.
pub struct NewsStrategy;

impl RetrievalStrategy for NewsStrategy {
    fn kind(&self) -> RetrievalKind {
        RetrievalKind::News
    }

    fn candidates(
        &self,
        graph: &SocialGraph,
        pool: &[Uuid],
        _user: &User,
        now: DateTime<Utc>,
    ) -> Vec<Uuid> {
        super::created_on(graph, pool, now.date_naive())
    }
}
