//! Error types for the social domain core.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("user {0} has already voted on this target")]
    DuplicateVote(Uuid),

    #[error("topic {0} is already attached to this question")]
    DuplicateTopic(Uuid),

    #[error("question title must not be empty")]
    InvalidTitle,

    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    #[error("question not found: {0}")]
    QuestionNotFound(Uuid),

    #[error("answer not found: {0}")]
    AnswerNotFound(Uuid),

    #[error("topic not found: {0}")]
    TopicNotFound(Uuid),

    #[error("notification not found: {0}")]
    NotificationNotFound(Uuid),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
