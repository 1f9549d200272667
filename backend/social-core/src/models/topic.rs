use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Description;
use crate::traits::Describable;

/// Named category linking interested users to questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    name: String,
    description: Description,
    questions: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: Description::new(description),
            questions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Questions tagged with this topic, in tagging order.
    pub fn questions(&self) -> &[Uuid] {
        &self.questions
    }

    /// Back-reference registration; a question appears at most once.
    pub(crate) fn record_question(&mut self, question_id: Uuid) {
        if !self.questions.contains(&question_id) {
            self.questions.push(question_id);
        }
    }
}

impl Describable for Topic {
    fn description_holder(&self) -> &Description {
        &self.description
    }

    fn description_holder_mut(&mut self) -> &mut Description {
        &mut self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_back_reference_is_unique() {
        let mut topic = Topic::new("rust", "Systems programming");
        let question = Uuid::new_v4();

        topic.record_question(question);
        topic.record_question(question);
        assert_eq!(topic.questions(), &[question]);
    }

    #[test]
    fn name_and_description_are_mutable() {
        let mut topic = Topic::new("rust", "Systems programming");
        topic.set_name("rustlang");
        topic.set_description("The Rust programming language");
        assert_eq!(topic.name(), "rustlang");
        assert_eq!(topic.description(), "The Rust programming language");
    }
}
