//! End-to-end retrieval scenarios: the four feed kinds running over one
//! shared community graph.

use chrono::{Duration, Utc};
use feed_core::{FeedConfig, FeedService, RetrievalKind};
use social_core::{SocialGraph, Topic, User, VoteTarget};
use uuid::Uuid;

struct Fixture {
    graph: SocialGraph,
    feed: FeedService,
    reader: Uuid,
    followed: Uuid,
    stranger: Uuid,
    rust: Uuid,
}

impl Fixture {
    fn new() -> Self {
        let mut graph = SocialGraph::new();
        let reader = graph.add_user(User::new("reader", "secret"));
        let followed = graph.add_user(User::new("followed", "secret"));
        let stranger = graph.add_user(User::new("stranger", "secret"));
        let rust = graph.add_topic(Topic::new("rust", "Systems programming"));

        graph.follow(reader, followed).unwrap();
        graph.add_interest(reader, rust).unwrap();

        Self {
            graph,
            feed: FeedService::new(FeedConfig::default()),
            reader,
            followed,
            stranger,
            rust,
        }
    }

    fn question(&mut self, author: Uuid, title: &str, topics: &[Uuid]) -> Uuid {
        let id = self
            .graph
            .post_question(author, title, "Description", topics)
            .unwrap();
        self.feed.add_question(id);
        id
    }

    fn upvote(&mut self, question: Uuid, count: usize) {
        for i in 0..count {
            let voter = self
                .graph
                .add_user(User::new(format!("voter_{}_{}", question, i), "secret"));
            self.graph
                .cast_vote(voter, VoteTarget::Question(question), true)
                .unwrap();
        }
    }

    fn titles(&self, kind: RetrievalKind) -> Vec<String> {
        self.feed
            .retrieve(&self.graph, kind, self.reader)
            .unwrap()
            .iter()
            .map(|q| q.title().to_owned())
            .collect()
    }
}

#[test]
fn social_feed_ranks_followed_authors_questions() {
    let mut fx = Fixture::new();
    let (followed, stranger) = (fx.followed, fx.stranger);
    let quiet = fx.question(followed, "Quiet question", &[]);
    let hot = fx.question(followed, "Hot question", &[]);
    let _foreign = fx.question(stranger, "Stranger question", &[]);
    fx.upvote(hot, 3);
    fx.upvote(quiet, 1);

    assert_eq!(fx.titles(RetrievalKind::Social), ["Quiet question", "Hot question"]);
}

#[test]
fn topics_feed_follows_interest_tags() {
    let mut fx = Fixture::new();
    let (stranger, rust) = (fx.stranger, fx.rust);
    let _tagged = fx.question(stranger, "Tagged question", &[rust]);
    let _untagged = fx.question(stranger, "Untagged question", &[]);

    assert_eq!(fx.titles(RetrievalKind::Topics), ["Tagged question"]);
}

#[test]
fn news_feed_is_empty_when_evaluated_on_another_day() {
    let mut fx = Fixture::new();
    let stranger = fx.stranger;
    let question = fx.question(stranger, "Fresh question", &[]);
    fx.upvote(question, 1);

    assert_eq!(fx.titles(RetrievalKind::News), ["Fresh question"]);

    let tomorrow = Utc::now() + Duration::days(1);
    let feed = fx
        .feed
        .retrieve_at(&fx.graph, RetrievalKind::News, fx.reader, tomorrow)
        .unwrap();
    assert!(feed.is_empty());
}

#[test]
fn popular_today_keeps_only_above_average_questions() {
    let mut fx = Fixture::new();
    let stranger = fx.stranger;
    let one_a = fx.question(stranger, "Mild question A", &[]);
    let one_b = fx.question(stranger, "Mild question B", &[]);
    let five = fx.question(stranger, "Runaway question", &[]);
    fx.upvote(one_a, 1);
    fx.upvote(one_b, 1);
    fx.upvote(five, 5);

    // Mean positive count is 7/3; only the five-vote question clears it.
    assert_eq!(fx.titles(RetrievalKind::PopularToday), ["Runaway question"]);
}

#[test]
fn popular_today_is_empty_without_todays_questions() {
    let fx = Fixture::new();
    assert!(fx.titles(RetrievalKind::PopularToday).is_empty());
}

#[test]
fn no_feed_ever_contains_the_requesters_own_questions() {
    let mut fx = Fixture::new();
    let (reader, followed, rust) = (fx.reader, fx.followed, fx.rust);

    // The reader follows themselves and tags their own question with an
    // interesting topic, so it becomes a candidate everywhere.
    fx.graph.follow(reader, reader).unwrap();
    let own = fx.question(reader, "Own question", &[rust]);
    fx.upvote(own, 10);
    let _other = fx.question(followed, "Foreign question", &[rust]);

    for kind in [
        RetrievalKind::Social,
        RetrievalKind::Topics,
        RetrievalKind::News,
        RetrievalKind::PopularToday,
    ] {
        assert!(
            !fx.titles(kind).contains(&"Own question".to_owned()),
            "{} feed leaked the requester's own question",
            kind.as_str()
        );
    }
}
