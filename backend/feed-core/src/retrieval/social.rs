use chrono::{DateTime, Utc};
use social_core::{SocialGraph, User};
use uuid::Uuid;

use super::{RetrievalKind, RetrievalStrategy};

/// Questions authored by the users the requester follows.
pub struct SocialStrategy;

impl RetrievalStrategy for SocialStrategy {
    fn kind(&self) -> RetrievalKind {
        RetrievalKind::Social
    }

    fn candidates(
        &self,
        graph: &SocialGraph,
        _pool: &[Uuid],
        user: &User,
        _now: DateTime<Utc>,
    ) -> Vec<Uuid> {
        let mut candidates = Vec::new();
        for followee_id in user.following() {
            if let Ok(followee) = graph.user(*followee_id) {
                candidates.extend_from_slice(followee.questions());
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::filter_and_sort;

    #[test]
    fn only_followed_authors_contribute() {
        let mut graph = SocialGraph::new();
        let reader = graph.add_user(User::new("reader", "secret"));
        let followed = graph.add_user(User::new("followed", "secret"));
        let stranger = graph.add_user(User::new("stranger", "secret"));

        let followed_q = graph
            .post_question(followed, "Followed question", "Description", &[])
            .unwrap();
        let _stranger_q = graph
            .post_question(stranger, "Stranger question", "Description", &[])
            .unwrap();
        graph.follow(reader, followed).unwrap();

        let user = graph.user(reader).unwrap();
        let candidates = SocialStrategy.candidates(&graph, &[], user, Utc::now());
        assert_eq!(candidates, vec![followed_q]);
    }

    #[test]
    fn own_questions_never_surface_even_when_following_oneself() {
        let mut graph = SocialGraph::new();
        let reader = graph.add_user(User::new("reader", "secret"));
        graph.follow(reader, reader).unwrap();
        let _own = graph
            .post_question(reader, "Own question", "Description", &[])
            .unwrap();

        let user = graph.user(reader).unwrap();
        let candidates = SocialStrategy.candidates(&graph, &[], user, Utc::now());
        let feed = filter_and_sort(&graph, &candidates, user, 100);
        assert!(feed.is_empty());
    }
}
