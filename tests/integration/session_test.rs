// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use threadsearch::client::{ApiClient, ApiClientError, SearchSession, SessionError};
use threadsearch::domain::models::sort::SortCriteria;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_results() -> serde_json::Value {
    json!([
        {
            "title": "low",
            "summary": "No summary available",
            "link": "https://stackoverflow.com/questions/1",
            "topAnswer": "Answered",
            "upvotes": 1,
            "commentCount": 0,
            "creationDate": 3000
        },
        {
            "title": "high",
            "summary": "body",
            "link": "https://www.reddit.com/r/rust/comments/2/",
            "topAnswer": "See comments on Reddit",
            "upvotes": 99,
            "commentCount": 5,
            "creationDate": 1000
        }
    ])
}

async fn session_for(server: &MockServer) -> SearchSession {
    SearchSession::new(ApiClient::new(&server.uri()).unwrap())
}

#[tokio::test]
async fn test_empty_query_is_blocked_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server).await;
    session.set_query("   ");

    let err = session.search().await.unwrap_err();
    assert!(matches!(err, SessionError::EmptyQuery));
    assert!(session.state().results.is_empty());
}

#[tokio::test]
async fn test_empty_recipient_is_blocked_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send-email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server).await;
    session.set_email("");

    let err = session.send_email().await.unwrap_err();
    assert!(matches!(err, SessionError::EmptyRecipient));
    assert!(session.state().email_error);
    assert!(!session.state().email_sent);

    session.set_email("reader@example.com");
    assert!(!session.state().email_error);
}

#[tokio::test]
async fn test_search_then_sort_then_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_results()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/send-email"))
        .and(body_partial_json(json!({
            "recipientEmail": "reader@example.com",
            "results": [{ "title": "high" }, { "title": "low" }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Email sent successfully!" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server).await;
    session.set_query(" rust ");
    assert_eq!(session.search().await.unwrap(), 2);

    let relevance: Vec<_> = session
        .sorted_results()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(relevance, vec!["low", "high"]);

    session.set_sort(SortCriteria::Upvotes);
    let by_upvotes = session.sorted_results();
    assert_eq!(by_upvotes[0].title, "high");
    assert!(by_upvotes.windows(2).all(|w| w[0].upvotes >= w[1].upvotes));

    // stored results stay in fetch order
    assert_eq!(session.state().results[0].title, "low");

    session.set_email("reader@example.com");
    session.send_email().await.unwrap();
    assert!(session.state().email_sent);
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_results()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "second"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Error fetching data from APIs" })),
        )
        .mount(&server)
        .await;

    let mut session = session_for(&server).await;
    session.set_query("first");
    session.search().await.unwrap();

    session.set_query("second");
    let err = session.search().await.unwrap_err();
    match err {
        SessionError::Api(ApiClientError::Api { status, message }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Error fetching data from APIs");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.state().results.len(), 2);
}
