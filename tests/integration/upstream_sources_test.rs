// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use threadsearch::domain::search::engine::{SearchError, SearchSource};
use threadsearch::infrastructure::search::reddit::RedditSource;
use threadsearch::infrastructure::search::stackoverflow::StackOverflowSource;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::*;

#[tokio::test]
async fn test_stackoverflow_source_normalizes_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STACKEXCHANGE_PATH))
        .and(query_param("intitle", "borrow checker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stackexchange_body(vec![
            stackexchange_item("Fighting the borrow checker", false, -1, 1_500_000_000),
        ])))
        .mount(&server)
        .await;

    let source = StackOverflowSource::new(reqwest::Client::new(), server.uri());
    let results = source.search("borrow checker").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Fighting the borrow checker");
    assert_eq!(results[0].top_answer, "Not Answered");
    assert_eq!(results[0].upvotes, -1);
    assert_eq!(results[0].comment_count, 4);
    assert_eq!(results[0].creation_date, 1_500_000_000_000);
}

#[tokio::test]
async fn test_stackoverflow_source_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let source = StackOverflowSource::new(reqwest::Client::new(), server.uri());
    let err = source.search("anything").await.unwrap_err();
    assert_eq!(err, SearchError::StatusError(502));
}

#[tokio::test]
async fn test_reddit_source_sends_user_agent_and_normalizes() {
    let stackexchange = MockServer::start().await;
    let reddit = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REDDIT_PATH))
        .and(query_param("q", "async rust"))
        .and(header("user-agent", "threadsearch-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reddit_body(vec![
            reddit_post("Async Rust in 2025", "Pin is hard", 77, 1_735_689_600.75),
        ])))
        .expect(1)
        .mount(&reddit)
        .await;

    let settings = upstream_settings(&stackexchange, &reddit);
    let client = threadsearch::infrastructure::search::SearchSourceFactory::create_client(&settings)
        .unwrap();
    let source = RedditSource::new(client, reddit.uri());
    let results = source.search("async rust").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].summary, "Pin is hard");
    assert_eq!(results[0].upvotes, 77);
    assert_eq!(results[0].comment_count, 12);
    assert_eq!(results[0].creation_date, 1_735_689_600_000);
    assert_eq!(
        results[0].link,
        "https://www.reddit.com/r/learnprogramming/comments/abc/Async_Rust_in_2025/"
    );
}

#[tokio::test]
async fn test_reddit_source_rejects_malformed_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REDDIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let source = RedditSource::new(reqwest::Client::new(), server.uri());
    let err = source.search("rust").await.unwrap_err();
    assert!(matches!(err, SearchError::DecodeError(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
    // nothing listens on port 1
    let source = StackOverflowSource::new(reqwest::Client::new(), "http://127.0.0.1:1");
    let err = source.search("rust").await.unwrap_err();
    assert!(matches!(err, SearchError::NetworkError(_)));
}
