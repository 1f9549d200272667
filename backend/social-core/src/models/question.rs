use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::{Answer, Description, VoteLedger};
use crate::traits::{Describable, Votable};

/// A question in the global pool.
///
/// Owns its answer list and its vote ledger outright; topics are kept as a
/// distinct, ordered id set with the back edge maintained by
/// [`crate::graph::SocialGraph::attach_topic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    title: String,
    description: Description,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    topics: Vec<Uuid>,
    answers: Vec<Answer>,
    ledger: VoteLedger,
}

impl Question {
    /// Construction takes the title as-is; validation applies on
    /// [`Question::set_title`].
    pub fn new(author_id: Uuid, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: Description::new(description),
            author_id,
            created_at: Utc::now(),
            topics: Vec::new(),
            answers: Vec::new(),
            ledger: VoteLedger::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> DomainResult<()> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::InvalidTitle);
        }
        self.title = title;
        Ok(())
    }

    pub fn topics(&self) -> &[Uuid] {
        &self.topics
    }

    /// Forward edge only; [`crate::graph::SocialGraph::attach_topic`] updates
    /// the topic's back-reference in the same mutation.
    pub(crate) fn attach_topic(&mut self, topic_id: Uuid) -> DomainResult<()> {
        if self.topics.contains(&topic_id) {
            return Err(DomainError::DuplicateTopic(topic_id));
        }
        self.topics.push(topic_id);
        Ok(())
    }

    /// Idempotent: re-adding an answer whose id is already present is a no-op.
    pub fn add_answer(&mut self, answer: Answer) {
        if self.answers.iter().any(|a| a.id == answer.id) {
            return;
        }
        self.answers.push(answer);
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn answer(&self, answer_id: Uuid) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    pub fn answer_mut(&mut self, answer_id: Uuid) -> Option<&mut Answer> {
        self.answers.iter_mut().find(|a| a.id == answer_id)
    }

    /// The answer with the highest net score; ties go to the earliest
    /// appended. Recomputed from live vote state on every call.
    pub fn best_answer(&self) -> Option<&Answer> {
        let mut best: Option<&Answer> = None;
        for answer in &self.answers {
            let replace = match best {
                None => true,
                Some(current) => answer.net_score() > current.net_score(),
            };
            if replace {
                best = Some(answer);
            }
        }
        best
    }
}

impl Votable for Question {
    fn ledger(&self) -> &VoteLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut VoteLedger {
        &mut self.ledger
    }
}

impl Describable for Question {
    fn description_holder(&self) -> &Description {
        &self.description
    }

    fn description_holder_mut(&mut self) -> &mut Description {
        &mut self.description
    }
}
