//! Fake classification and feedback gateways

use std::collections::VecDeque;

use async_trait::async_trait;
use mailtriage_core::{ClassificationGateway, FeedbackGateway};
use mailtriage_domain::{AnalysisInput, AnalysisResult, FeedbackSubmission, TransportError};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Returns scripted responses in order and records every input it receives.
///
/// With [`FakeClassifier::gated`], each call signals `entered` and then
/// blocks until `release` is notified, so tests can observe the in-flight
/// window.
#[derive(Default)]
pub struct FakeClassifier {
    responses: Mutex<VecDeque<Result<AnalysisResult, TransportError>>>,
    calls: Mutex<Vec<AnalysisInput>>,
    gate: Option<Gate>,
}

#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

impl FakeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self { gate: Some(Gate::default()), ..Self::default() }
    }

    pub fn respond_with(self, response: Result<AnalysisResult, TransportError>) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    pub fn gate(&self) -> &Gate {
        self.gate.as_ref().expect("classifier was not built with gated()")
    }

    pub fn calls(&self) -> Vec<AnalysisInput> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ClassificationGateway for FakeClassifier {
    async fn process(&self, input: &AnalysisInput) -> Result<AnalysisResult, TransportError> {
        self.calls.lock().push(input.clone());

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

/// Records submitted feedback and answers with a fixed outcome.
#[derive(Default)]
pub struct RecordingFeedbackGateway {
    submitted: Mutex<Vec<FeedbackSubmission>>,
    failure: Option<TransportError>,
}

impl RecordingFeedbackGateway {
    pub fn failing(error: TransportError) -> Self {
        Self { failure: Some(error), ..Self::default() }
    }

    pub fn submitted(&self) -> Vec<FeedbackSubmission> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl FeedbackGateway for RecordingFeedbackGateway {
    async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<(), TransportError> {
        self.submitted.lock().push(feedback.clone());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
