//! Feed aggregation over the global question pool.

use chrono::{DateTime, Utc};
use social_core::{DomainResult, Question, SocialGraph};
use tracing::info;
use uuid::Uuid;

use crate::config::FeedConfig;
use crate::retrieval::{filter_and_sort, RetrievalKind, RetrievalStrategy};

/// Holds the append-only pool of known questions and answers feed queries by
/// dispatching to a retrieval strategy. Every call recomputes from current
/// graph state; nothing is cached across calls.
#[derive(Debug, Default)]
pub struct FeedService {
    pool: Vec<Uuid>,
    config: FeedConfig,
}

impl FeedService {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            pool: Vec::new(),
            config,
        }
    }

    /// Register a question with the global pool.
    pub fn add_question(&mut self, question_id: Uuid) {
        self.pool.push(question_id);
    }

    /// The pool in registration order.
    pub fn questions(&self) -> &[Uuid] {
        &self.pool
    }

    /// Build a feed of `kind` for `user_id`, evaluated at the current
    /// instant.
    pub fn retrieve<'a>(
        &self,
        graph: &'a SocialGraph,
        kind: RetrievalKind,
        user_id: Uuid,
    ) -> DomainResult<Vec<&'a Question>> {
        self.retrieve_at(graph, kind, user_id, Utc::now())
    }

    /// Build a feed of `kind` for `user_id` with a pinned evaluation instant.
    pub fn retrieve_at<'a>(
        &self,
        graph: &'a SocialGraph,
        kind: RetrievalKind,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<&'a Question>> {
        self.retrieve_with(graph, kind.strategy().as_ref(), user_id, now)
    }

    /// Run an explicit strategy through the shared pipeline. This is the
    /// seam for plugging in strategies beyond the four built-in kinds.
    pub fn retrieve_with<'a>(
        &self,
        graph: &'a SocialGraph,
        strategy: &dyn RetrievalStrategy,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<&'a Question>> {
        let user = graph.user(user_id)?;
        let candidates = strategy.candidates(graph, &self.pool, user, now);
        let ranked = filter_and_sort(graph, &candidates, user, self.config.retrieval_limit);

        info!(
            "Feed retrieval completed: kind={}, user={}, candidates={}, results={}",
            strategy.kind().as_str(),
            user.username(),
            candidates.len(),
            ranked.len()
        );

        Ok(ranked
            .into_iter()
            .filter_map(|id| graph.question(id).ok())
            .collect())
    }

    /// Questions authored by users the requester follows.
    pub fn social_questions_for<'a>(
        &self,
        graph: &'a SocialGraph,
        user_id: Uuid,
    ) -> DomainResult<Vec<&'a Question>> {
        self.retrieve(graph, RetrievalKind::Social, user_id)
    }

    /// Questions tagged with the requester's topics of interest.
    pub fn topic_questions_for<'a>(
        &self,
        graph: &'a SocialGraph,
        user_id: Uuid,
    ) -> DomainResult<Vec<&'a Question>> {
        self.retrieve(graph, RetrievalKind::Topics, user_id)
    }

    /// Questions created today.
    pub fn news_questions_for<'a>(
        &self,
        graph: &'a SocialGraph,
        user_id: Uuid,
    ) -> DomainResult<Vec<&'a Question>> {
        self.retrieve(graph, RetrievalKind::News, user_id)
    }

    /// Today's questions with above-average approval.
    pub fn popular_questions_for<'a>(
        &self,
        graph: &'a SocialGraph,
        user_id: Uuid,
    ) -> DomainResult<Vec<&'a Question>> {
        self.retrieve(graph, RetrievalKind::PopularToday, user_id)
    }
}
