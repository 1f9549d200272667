mod answer;
mod description;
mod notification;
mod question;
mod topic;
mod user;
mod vote;

pub use answer::Answer;
pub use description::Description;
pub use notification::Notification;
pub use question::Question;
pub use topic::Topic;
pub use user::User;
pub use vote::{Vote, VoteLedger};
