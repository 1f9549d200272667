use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Description, VoteLedger};
use crate::traits::{Describable, Votable};

/// A reply to a question; votable and describable like its parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: Uuid,
    description: Description,
    pub author_id: Uuid,
    pub question_id: Uuid,
    pub created_at: DateTime<Utc>,
    ledger: VoteLedger,
}

impl Answer {
    pub fn new(question_id: Uuid, author_id: Uuid, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: Description::new(description),
            author_id,
            question_id,
            created_at: Utc::now(),
            ledger: VoteLedger::new(),
        }
    }
}

impl Votable for Answer {
    fn ledger(&self) -> &VoteLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut VoteLedger {
        &mut self.ledger
    }
}

impl Describable for Answer {
    fn description_holder(&self) -> &Description {
        &self.description
    }

    fn description_holder_mut(&mut self) -> &mut Description {
        &mut self.description
    }
}
