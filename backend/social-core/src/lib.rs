pub mod error;
pub mod graph;
pub mod models;
pub mod reputation;
pub mod traits;

pub use error::{DomainError, DomainResult};
pub use graph::{SocialGraph, VoteTarget};
pub use models::{Answer, Description, Notification, Question, Topic, User, Vote, VoteLedger};
pub use reputation::{reputation, ScoreWeights};
pub use traits::{Describable, Votable};
