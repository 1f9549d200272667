use chrono::{DateTime, Utc};
use social_core::{SocialGraph, User};
use uuid::Uuid;

use super::{RetrievalKind, RetrievalStrategy};

/// Questions tagged with the requester's topics of interest.
pub struct TopicsStrategy;

impl RetrievalStrategy for TopicsStrategy {
    fn kind(&self) -> RetrievalKind {
        RetrievalKind::Topics
    }

    fn candidates(
        &self,
        graph: &SocialGraph,
        _pool: &[Uuid],
        user: &User,
        _now: DateTime<Utc>,
    ) -> Vec<Uuid> {
        let mut candidates = Vec::new();
        for topic_id in user.topics_of_interest() {
            if let Ok(topic) = graph.topic(*topic_id) {
                candidates.extend_from_slice(topic.questions());
            }
        }
        candidates
    }
}
