//! Request dispatcher - at most one classification request in flight

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mailtriage_domain::constants::{PROCESS_FILE_FALLBACK, PROCESS_TEXT_FALLBACK};
use mailtriage_domain::{
    AnalysisInput, AnalysisResult, InputMode, Result, SelectedFile, TriageError,
};
use tracing::{debug, info, warn};

use super::ports::ClassificationGateway;

/// Dispatches classification requests through a [`ClassificationGateway`].
///
/// A second request while one is outstanding is refused with
/// [`TriageError::Busy`]; nothing is queued. No retry is attempted.
pub struct RequestDispatcher {
    gateway: Arc<dyn ClassificationGateway>,
    in_flight: AtomicBool,
}

impl RequestDispatcher {
    pub fn new(gateway: Arc<dyn ClassificationGateway>) -> Self {
        Self { gateway, in_flight: AtomicBool::new(false) }
    }

    /// Whether a request is currently outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit_file(&self, file: SelectedFile) -> Result<AnalysisResult> {
        self.dispatch(AnalysisInput::File(file)).await
    }

    pub async fn submit_text(&self, text: impl Into<String>) -> Result<AnalysisResult> {
        self.dispatch(AnalysisInput::Text(text.into())).await
    }

    /// Send an already validated input.
    ///
    /// Failures carry the service's `detail` when it sent one, otherwise a
    /// fallback naming the input mode.
    pub async fn dispatch(&self, input: AnalysisInput) -> Result<AnalysisResult> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(TriageError::Busy)?;
        let mode = input.mode();

        debug!(%mode, "Dispatching classification request");
        match self.gateway.process(&input).await {
            Ok(result) => {
                info!(
                    analysis_id = %result.id,
                    category = %result.category,
                    confidence = result.confidence,
                    "Classification completed"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(%mode, error = %err, "Classification request failed");
                Err(err.into_triage(fallback_message(mode)))
            }
        }
    }
}

fn fallback_message(mode: InputMode) -> &'static str {
    match mode {
        InputMode::File => PROCESS_FILE_FALLBACK,
        InputMode::Text => PROCESS_TEXT_FALLBACK,
    }
}

/// Holds the in-flight flag; releases it on drop, including when the
/// awaiting future is dropped mid-request.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_is_exclusive_and_released_on_drop() {
        let flag = AtomicBool::new(false);

        let first = InFlightGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlightGuard::acquire(&flag).is_none());

        drop(first);
        assert!(!flag.load(Ordering::Acquire));
        assert!(InFlightGuard::acquire(&flag).is_some());
    }

    #[test]
    fn fallback_names_the_mode() {
        assert_eq!(fallback_message(InputMode::File), "Failed to process file");
        assert_eq!(fallback_message(InputMode::Text), "Failed to process text");
    }
}
