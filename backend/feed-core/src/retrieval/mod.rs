//! Question retrieval strategies and their shared ranking pipeline.

mod news;
mod popular_today;
mod social;
mod topics;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use social_core::{SocialGraph, User, Votable};
use uuid::Uuid;

pub use news::NewsStrategy;
pub use popular_today::PopularTodayStrategy;
pub use social::SocialStrategy;
pub use topics::TopicsStrategy;

/// The four retrieval flavours a feed can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrievalKind {
    Social,
    Topics,
    News,
    PopularToday,
}

impl RetrievalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalKind::Social => "social",
            RetrievalKind::Topics => "topics",
            RetrievalKind::News => "news",
            RetrievalKind::PopularToday => "popular_today",
        }
    }

    /// Factory for the strategy implementing this kind.
    pub fn strategy(&self) -> Box<dyn RetrievalStrategy> {
        match self {
            RetrievalKind::Social => Box::new(SocialStrategy),
            RetrievalKind::Topics => Box::new(TopicsStrategy),
            RetrievalKind::News => Box::new(NewsStrategy),
            RetrievalKind::PopularToday => Box::new(PopularTodayStrategy),
        }
    }
}

/// One way of turning the global question pool into a candidate set for a
/// user. Stateless; every call derives from current graph state.
#[cfg_attr(test, mockall::automock)]
pub trait RetrievalStrategy {
    fn kind(&self) -> RetrievalKind;

    /// Collect candidate question ids for `user`. `now` pins the evaluation
    /// instant for the date-sensitive strategies; candidates may repeat and
    /// are not deduplicated.
    fn candidates(
        &self,
        graph: &SocialGraph,
        pool: &[Uuid],
        user: &User,
        now: DateTime<Utc>,
    ) -> Vec<Uuid>;
}

/// Rank `candidates` ascending by positive-vote count (stable, so ties keep
/// their original relative order), keep the highest-scoring `limit` entries,
/// then drop the requesting user's own questions.
///
/// Truncation happens before the self-exclusion filter: the user's own
/// high-scoring question can push a foreign lower-scoring one out of the
/// window. Callers observe that composition, so the two steps must stay in
/// this order.
pub fn filter_and_sort(
    graph: &SocialGraph,
    candidates: &[Uuid],
    user: &User,
    limit: usize,
) -> Vec<Uuid> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<Uuid> = candidates.to_vec();
    ranked.sort_by_key(|id| positive_count(graph, *id));

    let keep = limit.min(ranked.len());
    let top = ranked.split_off(ranked.len() - keep);

    top.into_iter()
        .filter(|id| {
            graph
                .question(*id)
                .map(|q| q.author_id != user.id)
                .unwrap_or(false)
        })
        .collect()
}

pub(crate) fn positive_count(graph: &SocialGraph, question_id: Uuid) -> usize {
    graph
        .question(question_id)
        .map(|q| q.ledger().positive_count())
        .unwrap_or(0)
}

/// Pool questions created on `date`.
pub(crate) fn created_on(graph: &SocialGraph, pool: &[Uuid], date: NaiveDate) -> Vec<Uuid> {
    pool.iter()
        .copied()
        .filter(|id| {
            graph
                .question(*id)
                .map(|q| q.created_at.date_naive() == date)
                .unwrap_or(false)
        })
        .collect()
}
