//! Integration tests for one-shot CLI commands
//!
//! **Coverage:**
//! - analyze: success, history recording, immediate feedback
//! - client-side rejection without network traffic
//! - history list/remove/clear, persisted across contexts
//! - feedback and status commands

mod support;

use clap::Parser as _;
use mailtriage_app::cli;
use mailtriage_domain::{InputRejection, TriageError};
use serde_json::json;
use support::{
    file_backed_context, mount_process, parse, test_context, ANALYSIS_ID, SUGGESTED_REPLY,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(ctx: &mailtriage_app::AppContext, args: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    cli::run(ctx, parse(args), &mut out).await?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[tokio::test]
async fn analyze_text_prints_result_and_records_history() {
    let server = MockServer::start().await;
    mount_process(&server, 1).await;
    let ctx = test_context(&server);

    let output =
        run(&ctx, &["analyze", "--text", "Please send me the Q3 report by Friday."]).await.unwrap();

    assert!(output.contains("Category:    Productive (92%)"), "{output}");
    assert!(output.contains(SUGGESTED_REPLY));
    assert!(!output.contains("Feedback"));

    let history = ctx.history.list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, ANALYSIS_ID);
    assert_eq!(history[0].summary, "Request for the Q3 report");
}

#[tokio::test]
async fn analyze_with_rating_sends_feedback_without_unedited_reply() {
    let server = MockServer::start().await;
    mount_process(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(body_json(json!({ "analysis_id": ANALYSIS_ID, "rating": 4 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = test_context(&server);

    let args = [
        "analyze",
        "--text",
        "Please send me the Q3 report",
        "--rating",
        "4",
        "--reply",
        SUGGESTED_REPLY,
    ];
    let output = run(&ctx, &args).await.unwrap();

    assert!(output.contains("Feedback sent."), "{output}");
}

#[tokio::test]
async fn analyze_keeps_result_when_feedback_fails() {
    let server = MockServer::start().await;
    mount_process(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let ctx = test_context(&server);

    let output = run(
        &ctx,
        &["analyze", "--text", "Please send me the Q3 report", "--rating", "2", "--reply", "No."],
    )
    .await
    .unwrap();

    assert!(output.contains("Feedback not sent: Failed to submit feedback"), "{output}");
    assert_eq!(ctx.history.list().len(), 1);
}

#[tokio::test]
async fn oversized_file_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    mount_process(&server, 0).await;
    let ctx = test_context(&server);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("big.txt");
    std::fs::write(&file, vec![b'a'; 2 * 1024 * 1024]).unwrap();

    let err = run(&ctx, &["analyze", "--file", file.to_str().unwrap()]).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TriageError>(),
        Some(TriageError::Rejected(InputRejection::FileTooLarge { size: 2_097_152, .. }))
    ));
    assert!(err.to_string().contains("File too large"));
    assert!(ctx.history.list().is_empty());
}

#[tokio::test]
async fn short_text_is_rejected() {
    let server = MockServer::start().await;
    mount_process(&server, 0).await;
    let ctx = test_context(&server);

    let err = run(&ctx, &["analyze", "--text", "Hi there"]).await.unwrap_err();

    assert_eq!(err.to_string(), "Text too short (minimum 10 characters)");
}

#[tokio::test]
async fn service_detail_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Texto muito curto" })),
        )
        .mount(&server)
        .await;
    let ctx = test_context(&server);

    let err = run(&ctx, &["analyze", "--text", "Please send me the Q3 report"]).await.unwrap_err();

    assert_eq!(err.to_string(), "Texto muito curto");
    assert!(ctx.history.list().is_empty());
}

#[tokio::test]
async fn history_persists_and_can_be_managed() {
    let server = MockServer::start().await;
    mount_process(&server, 1).await;
    let data_dir = tempfile::tempdir().unwrap();

    let first = file_backed_context(&server, data_dir.path());
    run(&first, &["analyze", "--text", "Please send me the Q3 report by Friday."]).await.unwrap();

    let second = file_backed_context(&server, data_dir.path());
    let listed = run(&second, &["history", "list"]).await.unwrap();
    assert!(listed.contains("Request for the Q3 report"), "{listed}");
    assert!(listed.contains(ANALYSIS_ID));

    let json_listing = run(&second, &["history", "list", "--json"]).await.unwrap();
    let records: serde_json::Value = serde_json::from_str(&json_listing).unwrap();
    assert_eq!(records[0]["category"], "Produtivo");

    let missing = run(&second, &["history", "remove", "unknown-id"]).await.unwrap();
    assert!(missing.contains("No history entry with id unknown-id"));

    let removed = run(&second, &["history", "remove", ANALYSIS_ID]).await.unwrap();
    assert!(removed.contains("Removed"));
    assert!(second.history.list().is_empty());

    run(&second, &["history", "clear"]).await.unwrap();
    assert_eq!(run(&second, &["history", "list"]).await.unwrap().trim(), "No analyses yet.");
}

#[tokio::test]
async fn feedback_command_validates_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let ctx = test_context(&server);
    let comments = "x".repeat(501);

    let err = run(&ctx, &["feedback", ANALYSIS_ID, "--comments", &comments]).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<TriageError>(), Some(TriageError::InvalidInput(_))));
}

#[tokio::test]
async fn feedback_command_sends_category_correction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(body_json(json!({
            "analysis_id": ANALYSIS_ID,
            "rating": 3,
            "user_category": "Improdutivo"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = test_context(&server);

    let output =
        run(&ctx, &["feedback", ANALYSIS_ID, "--rating", "3", "--category", "unproductive"])
            .await
            .unwrap();

    assert_eq!(output.trim(), "Feedback sent.");
}

#[tokio::test]
async fn status_and_health_commands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/status/{ANALYSIS_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ANALYSIS_ID,
            "status": "completed",
            "category": "Produtivo",
            "confidence": 0.92
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "degraded",
            "version": "1.0.0",
            "openai_configured": false,
            "database_connected": true
        })))
        .mount(&server)
        .await;
    let ctx = test_context(&server);

    let status = run(&ctx, &["status", ANALYSIS_ID]).await.unwrap();
    assert!(status.starts_with(&format!("Analysis {ANALYSIS_ID}: completed")), "{status}");
    assert!(status.contains("Confidence: 92%"));

    let health = run(&ctx, &["health"]).await.unwrap();
    assert_eq!(health.trim(), "Service: degraded (model NOT configured)");
}

#[test]
fn cli_rejects_reply_and_reply_file_together() {
    let result = mailtriage_app::Cli::try_parse_from([
        "mailtriage",
        "analyze",
        "--text",
        "Please send me the Q3 report",
        "--rating",
        "5",
        "--reply",
        "Ok",
        "--reply-file",
        "reply.txt",
    ]);
    assert!(result.is_err());
}
