use serde::{Deserialize, Serialize};

/// Backing store for the describable capability; entities embed one and
/// forward their description accessors to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
