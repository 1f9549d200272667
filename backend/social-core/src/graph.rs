//! In-memory store of the whole entity graph.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::{Answer, Notification, Question, Topic, User, Vote};
use crate::traits::Votable;

/// Identifies the target of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTarget {
    Question(Uuid),
    Answer(Uuid),
}

/// Id-indexed entity store.
///
/// Associations are kept as id collections on both sides; every mutation
/// that touches two sides goes through a single method here, so forward and
/// back edges cannot desynchronize. Reads take `&self`, mutations `&mut
/// self`; a concurrent host wraps the graph in its own lock.
#[derive(Debug, Default)]
pub struct SocialGraph {
    users: HashMap<Uuid, User>,
    topics: HashMap<Uuid, Topic>,
    questions: HashMap<Uuid, Question>,
    /// answer id to owning question id
    answer_index: HashMap<Uuid, Uuid>,
    notifications: Vec<Notification>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- registration & lookup ----

    pub fn add_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    pub fn add_topic(&mut self, topic: Topic) -> Uuid {
        let id = topic.id;
        self.topics.insert(id, topic);
        id
    }

    pub fn user(&self, id: Uuid) -> DomainResult<&User> {
        self.users.get(&id).ok_or(DomainError::UserNotFound(id))
    }

    pub fn user_mut(&mut self, id: Uuid) -> DomainResult<&mut User> {
        self.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))
    }

    pub fn topic(&self, id: Uuid) -> DomainResult<&Topic> {
        self.topics.get(&id).ok_or(DomainError::TopicNotFound(id))
    }

    pub fn topic_mut(&mut self, id: Uuid) -> DomainResult<&mut Topic> {
        self.topics.get_mut(&id).ok_or(DomainError::TopicNotFound(id))
    }

    pub fn question(&self, id: Uuid) -> DomainResult<&Question> {
        self.questions.get(&id).ok_or(DomainError::QuestionNotFound(id))
    }

    pub fn question_mut(&mut self, id: Uuid) -> DomainResult<&mut Question> {
        self.questions.get_mut(&id).ok_or(DomainError::QuestionNotFound(id))
    }

    /// Resolve an answer through its owning question.
    pub fn answer(&self, id: Uuid) -> DomainResult<&Answer> {
        let question_id = *self
            .answer_index
            .get(&id)
            .ok_or(DomainError::AnswerNotFound(id))?;
        self.question(question_id)?
            .answer(id)
            .ok_or(DomainError::AnswerNotFound(id))
    }

    // ---- social edges ----

    /// Add `followee_id` to the follower's following set. Idempotent;
    /// self-follow stays permitted.
    pub fn follow(&mut self, follower_id: Uuid, followee_id: Uuid) -> DomainResult<()> {
        if !self.users.contains_key(&followee_id) {
            return Err(DomainError::UserNotFound(followee_id));
        }
        self.user_mut(follower_id)?.follow(followee_id);
        Ok(())
    }

    /// Idempotent removal from the following set.
    pub fn stop_follow(&mut self, follower_id: Uuid, followee_id: Uuid) -> DomainResult<()> {
        self.user_mut(follower_id)?.stop_follow(followee_id);
        Ok(())
    }

    /// Register the user's interest in an existing topic. Idempotent.
    pub fn add_interest(&mut self, user_id: Uuid, topic_id: Uuid) -> DomainResult<()> {
        if !self.topics.contains_key(&topic_id) {
            return Err(DomainError::TopicNotFound(topic_id));
        }
        self.user_mut(user_id)?.add_interest(topic_id);
        Ok(())
    }

    // ---- content ----

    /// Create a question for `author_id`, attaching `topics` one at a time so
    /// construction-time duplicates are rejected the same way later
    /// attachments are. Either the whole call applies or nothing is stored.
    pub fn post_question(
        &mut self,
        author_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        topics: &[Uuid],
    ) -> DomainResult<Uuid> {
        if !self.users.contains_key(&author_id) {
            return Err(DomainError::UserNotFound(author_id));
        }
        for topic_id in topics {
            if !self.topics.contains_key(topic_id) {
                return Err(DomainError::TopicNotFound(*topic_id));
            }
        }

        let mut question = Question::new(author_id, title, description);
        let question_id = question.id;
        for topic_id in topics {
            question.attach_topic(*topic_id)?;
        }

        self.questions.insert(question_id, question);
        for topic_id in topics {
            self.topic_mut(*topic_id)?.record_question(question_id);
        }
        self.user_mut(author_id)?.record_question(question_id);

        debug!("Question posted: id={}, author={}", question_id, author_id);
        Ok(question_id)
    }

    /// Create an answer, registering it with both the question and the author
    /// in the same mutation. Notifies the question author unless they
    /// answered themselves.
    pub fn post_answer(
        &mut self,
        question_id: Uuid,
        author_id: Uuid,
        description: impl Into<String>,
    ) -> DomainResult<Uuid> {
        let author_name = self
            .users
            .get(&author_id)
            .map(|u| u.username().to_owned())
            .ok_or(DomainError::UserNotFound(author_id))?;

        let question = self
            .questions
            .get_mut(&question_id)
            .ok_or(DomainError::QuestionNotFound(question_id))?;
        let question_author = question.author_id;

        let answer = Answer::new(question_id, author_id, description);
        let answer_id = answer.id;
        question.add_answer(answer);

        self.user_mut(author_id)?.record_answer(answer_id);
        self.answer_index.insert(answer_id, question_id);

        if question_author != author_id {
            self.notifications.push(Notification::new(
                question_author,
                format!("{} answered your question.", author_name),
                format!("/question/{}", question_id),
            ));
        }

        debug!(
            "Answer posted: id={}, question={}, author={}",
            answer_id, question_id, author_id
        );
        Ok(answer_id)
    }

    /// Attach an existing topic to a question, updating both sides in one
    /// mutation. A rejected attach leaves neither side changed.
    pub fn attach_topic(&mut self, question_id: Uuid, topic_id: Uuid) -> DomainResult<()> {
        if !self.topics.contains_key(&topic_id) {
            return Err(DomainError::TopicNotFound(topic_id));
        }
        self.question_mut(question_id)?.attach_topic(topic_id)?;
        self.topic_mut(topic_id)?.record_question(question_id);
        Ok(())
    }

    /// Shorthand for [`Question::best_answer`] through the store.
    pub fn best_answer(&self, question_id: Uuid) -> DomainResult<Option<&Answer>> {
        Ok(self.question(question_id)?.best_answer())
    }

    // ---- voting ----

    /// Create a vote and register its id with the caster. The one-vote rule
    /// is not checked here; the target's ledger enforces it on
    /// [`SocialGraph::add_vote`], so the returned vote may end up counted
    /// nowhere.
    pub fn new_vote(&mut self, user_id: Uuid, is_positive: bool) -> DomainResult<Vote> {
        let user = self.user_mut(user_id)?;
        let vote = Vote::new(user_id, is_positive);
        user.record_vote(vote.id);
        Ok(vote)
    }

    /// Count a vote on its target. Rejects a second vote by the same user on
    /// the same target; on success the content author is notified unless
    /// they voted on their own content.
    pub fn add_vote(&mut self, target: VoteTarget, vote: Vote) -> DomainResult<()> {
        let voter_id = vote.user_id;
        let (content_author, link, noun) = match target {
            VoteTarget::Question(question_id) => {
                let question = self
                    .questions
                    .get_mut(&question_id)
                    .ok_or(DomainError::QuestionNotFound(question_id))?;
                question.add_vote(vote)?;
                (
                    question.author_id,
                    format!("/question/{}", question_id),
                    "question",
                )
            }
            VoteTarget::Answer(answer_id) => {
                let question_id = *self
                    .answer_index
                    .get(&answer_id)
                    .ok_or(DomainError::AnswerNotFound(answer_id))?;
                let question = self
                    .questions
                    .get_mut(&question_id)
                    .ok_or(DomainError::QuestionNotFound(question_id))?;
                let answer = question
                    .answer_mut(answer_id)
                    .ok_or(DomainError::AnswerNotFound(answer_id))?;
                answer.add_vote(vote)?;
                (
                    answer.author_id,
                    format!("/question/{}", question_id),
                    "answer",
                )
            }
        };

        if content_author != voter_id {
            if let Some(voter) = self.users.get(&voter_id) {
                self.notifications.push(Notification::new(
                    content_author,
                    format!("{} voted on your {}.", voter.username(), noun),
                    link,
                ));
            }
        }
        Ok(())
    }

    /// Create and count a vote in one step. On a duplicate the vote id stays
    /// registered with the caster while the target keeps its first vote.
    pub fn cast_vote(
        &mut self,
        user_id: Uuid,
        target: VoteTarget,
        is_positive: bool,
    ) -> DomainResult<Uuid> {
        let vote = self.new_vote(user_id, is_positive)?;
        let vote_id = vote.id;
        self.add_vote(target, vote)?;
        debug!("Vote counted: id={}, user={}", vote_id, user_id);
        Ok(vote_id)
    }

    /// The counted vote `user_id` holds on `target`, for in-place polarity
    /// flips after counting.
    pub fn vote_mut(&mut self, target: VoteTarget, user_id: Uuid) -> DomainResult<Option<&mut Vote>> {
        match target {
            VoteTarget::Question(question_id) => {
                let question = self
                    .questions
                    .get_mut(&question_id)
                    .ok_or(DomainError::QuestionNotFound(question_id))?;
                Ok(question.ledger_mut().by_user_mut(user_id))
            }
            VoteTarget::Answer(answer_id) => {
                let question_id = *self
                    .answer_index
                    .get(&answer_id)
                    .ok_or(DomainError::AnswerNotFound(answer_id))?;
                let question = self
                    .questions
                    .get_mut(&question_id)
                    .ok_or(DomainError::QuestionNotFound(question_id))?;
                let answer = question
                    .answer_mut(answer_id)
                    .ok_or(DomainError::AnswerNotFound(answer_id))?;
                Ok(answer.ledger_mut().by_user_mut(user_id))
            }
        }
    }

    // ---- notifications ----

    /// Notifications for a user, newest first.
    pub fn notifications_for(&self, user_id: Uuid) -> Vec<&Notification> {
        self.notifications
            .iter()
            .rev()
            .filter(|n| n.receiver_id == user_id)
            .collect()
    }

    /// Unread notifications for a user, newest first.
    pub fn unread_notifications_for(&self, user_id: Uuid) -> Vec<&Notification> {
        self.notifications
            .iter()
            .rev()
            .filter(|n| n.receiver_id == user_id && !n.read)
            .collect()
    }

    pub fn unread_count(&self, user_id: Uuid) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.receiver_id == user_id && !n.read)
            .count()
    }

    pub fn mark_notification_read(&mut self, notification_id: Uuid) -> DomainResult<()> {
        self.notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .map(|n| n.mark_read())
            .ok_or(DomainError::NotificationNotFound(notification_id))
    }
}
