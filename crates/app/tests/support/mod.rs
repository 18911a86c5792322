#![allow(dead_code)]

use std::path::Path;

use clap::Parser;
use mailtriage_app::{AppContext, Cli, Command};
use mailtriage_domain::Config;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ANALYSIS_ID: &str = "3f2c9a8e-5b1d-4c7e-9f00-1a2b3c4d5e6f";
pub const SUGGESTED_REPLY: &str = "Hi, I will send the Q3 report by Friday.";

/// Context talking to `server` with in-memory history.
pub fn test_context(server: &MockServer) -> AppContext {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.storage.ephemeral = true;
    AppContext::new(config).expect("context should be created")
}

/// Context talking to `server` with history persisted under `data_dir`.
pub fn file_backed_context(server: &MockServer, data_dir: &Path) -> AppContext {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.storage.data_dir = Some(data_dir.to_path_buf());
    AppContext::new(config).expect("context should be created")
}

pub fn analysis_body() -> Value {
    json!({
        "id": ANALYSIS_ID,
        "category": "Produtivo",
        "confidence": 0.92,
        "suggested_reply": SUGGESTED_REPLY,
        "summary": "Request for the Q3 report",
        "model_used": "gpt-4o-mini",
        "timestamp": "2024-05-02T14:03:11.482Z",
        "reason": "Asks for a concrete deliverable"
    })
}

/// Mount a successful `/api/process` response expected `times` times.
pub async fn mount_process(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
        .expect(times)
        .mount(server)
        .await;
}

pub fn parse(args: &[&str]) -> Command {
    let argv = std::iter::once("mailtriage").chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("arguments should parse").command
}
