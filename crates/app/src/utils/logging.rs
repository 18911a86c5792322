use std::time::Duration;

use mailtriage_domain::{LoggingConfig, TriageError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, else from `config.level`.
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.with_target(false).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    }
    installed
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier (e.g. `"history::clear"`) and
/// never carry email content.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `TriageError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TriageError) -> &'static str {
    match error {
        TriageError::Rejected(_) => "rejected",
        TriageError::Busy => "busy",
        TriageError::Transport(_) => "transport",
        TriageError::InvalidInput(_) => "invalid_input",
        TriageError::InvalidState(_) => "invalid_state",
        TriageError::Config(_) => "config",
        TriageError::Storage(_) => "storage",
        TriageError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use mailtriage_domain::InputRejection;

    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&TriageError::Busy), "busy");
        assert_eq!(error_label(&InputRejection::NoInput.into()), "rejected");
        assert_eq!(error_label(&TriageError::Transport("x".into())), "transport");
    }
}
