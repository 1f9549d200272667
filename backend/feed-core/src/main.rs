use anyhow::{Context, Result};
use tracing::info;

use feed_core::{FeedConfig, FeedService, RetrievalKind};
use social_core::{reputation, SocialGraph, Topic, User, VoteTarget};

/// Seeds a small community and walks the four retrieval kinds, logging what
/// each feed would show.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("🔧 Starting feed-core demo");

    let config = FeedConfig::from_env().context("Failed to load configuration")?;
    info!(
        "✅ Configuration loaded: retrieval_limit={}, question_points={}, answer_points={}",
        config.retrieval_limit, config.weights.question_points, config.weights.answer_points
    );
    let weights = config.weights.clone();

    let mut graph = SocialGraph::new();
    let mut feed = FeedService::new(config);

    let alice = graph.add_user(User::new("alice", "wonder"));
    let bob = graph.add_user(User::new("bob", "builder"));
    let carol = graph.add_user(User::new("carol", "singer"));

    let rust = graph.add_topic(Topic::new("rust", "The Rust programming language"));
    let databases = graph.add_topic(Topic::new("databases", "Storage engines and query planners"));

    graph.follow(alice, bob)?;
    graph.add_interest(alice, rust)?;

    let lifetimes = graph.post_question(
        bob,
        "How do lifetimes work?",
        "I keep fighting the borrow checker.",
        &[rust],
    )?;
    let indexes = graph.post_question(
        carol,
        "When is a covering index worth it?",
        "Reads dominate my workload.",
        &[databases],
    )?;
    for question in [lifetimes, indexes] {
        feed.add_question(question);
    }

    let answer = graph.post_answer(lifetimes, carol, "Lifetimes name reference validity regions.")?;
    graph.cast_vote(alice, VoteTarget::Answer(answer), true)?;
    graph.cast_vote(carol, VoteTarget::Question(lifetimes), true)?;
    graph.cast_vote(alice, VoteTarget::Question(indexes), true)?;
    info!("✅ Seeded {} users and {} questions", 3, feed.questions().len());

    for kind in [
        RetrievalKind::Social,
        RetrievalKind::Topics,
        RetrievalKind::News,
        RetrievalKind::PopularToday,
    ] {
        let questions = feed.retrieve(&graph, kind, alice)?;
        let titles: Vec<&str> = questions.iter().map(|q| q.title()).collect();
        info!(
            "📋 {} feed for alice: {}",
            kind.as_str(),
            serde_json::to_string(&titles)?
        );
    }

    for (name, id) in [("bob", bob), ("carol", carol)] {
        info!("⭐ Reputation for {}: {}", name, reputation(&graph, id, &weights)?);
    }
    info!(
        "🔔 Unread notifications for bob: {}",
        graph.unread_count(bob)
    );

    info!("🎉 feed-core demo finished");
    Ok(())
}
