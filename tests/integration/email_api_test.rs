// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use super::helpers::*;

fn sample_results() -> serde_json::Value {
    json!([
        {
            "title": "What is recursion",
            "summary": "No summary available",
            "link": "https://stackoverflow.com/questions/1",
            "topAnswer": "Answered",
            "upvotes": 50,
            "commentCount": 4,
            "creationDate": 1_600_000_000_000i64
        },
        {
            "title": "Recursion finally clicked",
            "summary": "It took me weeks",
            "link": "https://www.reddit.com/r/learnprogramming/comments/abc/x/",
            "topAnswer": "See comments on Reddit",
            "upvotes": 120,
            "commentCount": 12,
            "creationDate": 1_700_000_000_000i64
        }
    ])
}

#[tokio::test]
async fn test_send_email_delivers_digest_to_recipient() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/send-email")
        .json(&json!({
            "recipientEmail": "reader@example.com",
            "results": sample_results()
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Email sent successfully!" }));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "reader@example.com");
    assert_eq!(sent[0].subject, "Your Search Results");

    let body = &sent[0].html_body;
    assert!(body.starts_with("<div>"));
    assert!(body.ends_with("</div>"));
    assert_eq!(body.matches("View Original Post").count(), 2);
    assert!(body.find("What is recursion").unwrap() < body.find("Recursion finally clicked").unwrap());
    assert!(body.contains("<strong>Date:</strong> 9/13/2020"));
    assert!(body.contains("<strong>Date:</strong> 11/14/2023"));
}

#[tokio::test]
async fn test_send_email_with_empty_results() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/send-email")
        .json(&json!({ "recipientEmail": "reader@example.com", "results": [] }))
        .await;

    response.assert_status_ok();
    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].html_body, "<div></div>");
}

#[tokio::test]
async fn test_send_email_transport_failure_returns_generic_error() {
    let app = create_test_app_with_mailer(RecordingMailer::failing()).await;

    let response = app
        .server
        .post("/send-email")
        .json(&json!({
            "recipientEmail": "reader@example.com",
            "results": sample_results()
        }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Error sending email" }));
}

#[tokio::test]
async fn test_send_email_blank_recipient_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/send-email")
        .json(&json!({ "recipientEmail": "  ", "results": [] }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_send_email_malformed_body_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/send-email")
        .json(&json!({ "recipientEmail": "reader@example.com", "results": [{ "title": 1 }] }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
    assert!(app.mailer.sent().is_empty());
}
