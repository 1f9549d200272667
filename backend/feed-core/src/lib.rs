pub mod config;
pub mod retrieval;
pub mod service;

pub use config::FeedConfig;
pub use retrieval::{
    filter_and_sort, NewsStrategy, PopularTodayStrategy, RetrievalKind, RetrievalStrategy,
    SocialStrategy, TopicsStrategy,
};
pub use service::FeedService;
