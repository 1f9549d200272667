use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform participant: authored content, follows, interests and cast votes.
///
/// The collections hold ids; [`crate::graph::SocialGraph`] resolves them and
/// keeps both sides of each association in step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    username: String,
    password: String,
    questions: Vec<Uuid>,
    answers: Vec<Uuid>,
    topics_of_interest: Vec<Uuid>,
    following: Vec<Uuid>,
    votes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            questions: Vec::new(),
            answers: Vec::new(),
            topics_of_interest: Vec::new(),
            following: Vec::new(),
            votes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Follow another user. Idempotent; self-follow is left to the caller to
    /// police.
    pub fn follow(&mut self, user_id: Uuid) {
        if !self.following.contains(&user_id) {
            self.following.push(user_id);
        }
    }

    /// Idempotent removal from the following set.
    pub fn stop_follow(&mut self, user_id: Uuid) {
        self.following.retain(|id| *id != user_id);
    }

    pub fn following(&self) -> &[Uuid] {
        &self.following
    }

    /// Register interest in a topic. Idempotent.
    pub fn add_interest(&mut self, topic_id: Uuid) {
        if !self.topics_of_interest.contains(&topic_id) {
            self.topics_of_interest.push(topic_id);
        }
    }

    pub fn topics_of_interest(&self) -> &[Uuid] {
        &self.topics_of_interest
    }

    pub fn questions(&self) -> &[Uuid] {
        &self.questions
    }

    pub fn answers(&self) -> &[Uuid] {
        &self.answers
    }

    pub fn votes(&self) -> &[Uuid] {
        &self.votes
    }

    pub(crate) fn record_question(&mut self, question_id: Uuid) {
        self.questions.push(question_id);
    }

    pub(crate) fn record_answer(&mut self, answer_id: Uuid) {
        self.answers.push(answer_id);
    }

    pub(crate) fn record_vote(&mut self, vote_id: Uuid) {
        self.votes.push(vote_id);
    }
}
