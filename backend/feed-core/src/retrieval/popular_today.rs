use chrono::{DateTime, Utc};
use social_core::{SocialGraph, User};
use uuid::Uuid;

use super::{positive_count, RetrievalKind, RetrievalStrategy};

/// Today's pool questions whose positive-vote count strictly exceeds the
/// mean positive-vote count across today's questions.
pub struct PopularTodayStrategy;

impl RetrievalStrategy for PopularTodayStrategy {
    fn kind(&self) -> RetrievalKind {
        RetrievalKind::PopularToday
    }

    fn candidates(
        &self,
        graph: &SocialGraph,
        pool: &[Uuid],
        _user: &User,
        now: DateTime<Utc>,
    ) -> Vec<Uuid> {
        let today = super::created_on(graph, pool, now.date_naive());
        if today.is_empty() {
            return Vec::new();
        }

        let total: usize = today.iter().map(|id| positive_count(graph, *id)).sum();
        let mean = total as f64 / today.len() as f64;

        today
            .into_iter()
            .filter(|id| positive_count(graph, *id) as f64 > mean)
            .collect()
    }
}
