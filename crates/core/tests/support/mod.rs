//! Shared test helpers for `mailtriage-core` integration tests.
//!
//! These helpers provide reusable fixtures and in-memory fakes so that
//! orchestration tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod gateways;
pub mod store;

use std::sync::Arc;

use mailtriage_core::{AnalysisSession, HistoryCache, RequestDispatcher};
use mailtriage_domain::{AnalysisResult, Category, HistoryRecord, SelectedFile};

pub use gateways::{FakeClassifier, RecordingFeedbackGateway};
pub use store::MemoryStore;

/// Analysis result as the service would return it for the Q3 report email.
pub fn productive_result(id: &str) -> AnalysisResult {
    AnalysisResult {
        id: id.to_string(),
        category: Category::Productive,
        confidence: 0.92,
        suggested_reply: "Hi, I will send the Q3 report by Friday.".to_string(),
        summary: "Request for the Q3 report".to_string(),
        model_used: "gpt-4o-mini".to_string(),
        timestamp: "2025-03-14T12:30:00".to_string(),
        reason: None,
    }
}

pub fn history_record(id: &str) -> HistoryRecord {
    HistoryRecord::from(&productive_result(id))
}

/// In-memory file of exactly `size` bytes.
pub fn file_of_size(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(name, vec![b'a'; size])
}

/// Fully wired session over the given fakes.
pub struct Harness {
    pub classifier: Arc<FakeClassifier>,
    pub store: Arc<MemoryStore>,
    pub history: Arc<HistoryCache>,
    pub dispatcher: Arc<RequestDispatcher>,
}

impl Harness {
    pub fn new(classifier: FakeClassifier) -> Self {
        let classifier = Arc::new(classifier);
        let store = Arc::new(MemoryStore::default());
        let history = Arc::new(HistoryCache::new(store.clone()));
        let dispatcher = Arc::new(RequestDispatcher::new(classifier.clone()));
        Self { classifier, store, history, dispatcher }
    }

    pub fn session(&self) -> AnalysisSession {
        AnalysisSession::new(self.dispatcher.clone(), self.history.clone())
    }
}
