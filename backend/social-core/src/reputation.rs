//! Community-approval scoring.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainResult;
use crate::graph::SocialGraph;
use crate::traits::Votable;

/// Points awarded per net-positive contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_question_points")]
    pub question_points: u32,
    #[serde(default = "default_answer_points")]
    pub answer_points: u32,
}

fn default_question_points() -> u32 {
    10
}

fn default_answer_points() -> u32 {
    20
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            question_points: default_question_points(),
            answer_points: default_answer_points(),
        }
    }
}

/// Aggregate reputation for a user: `question_points` per authored question
/// and `answer_points` per authored answer whose positive votes strictly
/// outnumber the negative ones. Ties and unvoted entities contribute
/// nothing. Recomputed from live vote state on every call.
pub fn reputation(graph: &SocialGraph, user_id: Uuid, weights: &ScoreWeights) -> DomainResult<u32> {
    let user = graph.user(user_id)?;

    let mut score = 0;
    for question_id in user.questions() {
        if graph.question(*question_id)?.net_score() > 0 {
            score += weights.question_points;
        }
    }
    for answer_id in user.answers() {
        if graph.answer(*answer_id)?.net_score() > 0 {
            score += weights.answer_points;
        }
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VoteTarget;
    use crate::models::User;

    fn voters(graph: &mut SocialGraph, n: usize) -> Vec<Uuid> {
        (0..n)
            .map(|i| graph.add_user(User::new(format!("voter_{}", i), "secret")))
            .collect()
    }

    #[test]
    fn question_and_answer_in_net_positive_score_thirty() {
        let mut graph = SocialGraph::new();
        let author = graph.add_user(User::new("author", "secret"));
        let asker = graph.add_user(User::new("asker", "secret"));

        let own_question = graph
            .post_question(author, "Own question", "Description", &[])
            .unwrap();
        let other_question = graph
            .post_question(asker, "Other question", "Description", &[])
            .unwrap();
        let answer = graph.post_answer(other_question, author, "An answer").unwrap();

        for voter in voters(&mut graph, 2) {
            graph
                .cast_vote(voter, VoteTarget::Question(own_question), true)
                .unwrap();
        }
        for voter in voters(&mut graph, 3) {
            graph.cast_vote(voter, VoteTarget::Answer(answer), true).unwrap();
        }

        let weights = ScoreWeights::default();
        assert_eq!(reputation(&graph, author, &weights).unwrap(), 30);

        // More approval in the same direction must not change the score.
        for voter in voters(&mut graph, 4) {
            graph
                .cast_vote(voter, VoteTarget::Question(own_question), true)
                .unwrap();
        }
        assert_eq!(reputation(&graph, author, &weights).unwrap(), 30);
    }

    #[test]
    fn ties_and_unvoted_content_score_zero() {
        let mut graph = SocialGraph::new();
        let author = graph.add_user(User::new("author", "secret"));
        let question = graph
            .post_question(author, "Question", "Description", &[])
            .unwrap();

        let weights = ScoreWeights::default();
        assert_eq!(reputation(&graph, author, &weights).unwrap(), 0);

        // One up, one down: still a tie.
        let ups = voters(&mut graph, 1);
        let downs = voters(&mut graph, 1);
        graph
            .cast_vote(ups[0], VoteTarget::Question(question), true)
            .unwrap();
        graph
            .cast_vote(downs[0], VoteTarget::Question(question), false)
            .unwrap();
        assert_eq!(reputation(&graph, author, &weights).unwrap(), 0);
    }

    #[test]
    fn weights_are_configurable() {
        let mut graph = SocialGraph::new();
        let author = graph.add_user(User::new("author", "secret"));
        let question = graph
            .post_question(author, "Question", "Description", &[])
            .unwrap();
        let voter = graph.add_user(User::new("voter", "secret"));
        graph
            .cast_vote(voter, VoteTarget::Question(question), true)
            .unwrap();

        let weights = ScoreWeights {
            question_points: 7,
            answer_points: 11,
        };
        assert_eq!(reputation(&graph, author, &weights).unwrap(), 7);
    }
}
