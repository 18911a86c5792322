//! Conversions from external infrastructure errors into domain errors.

use mailtriage_domain::{TransportError, TriageError};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TriageError);

impl From<InfraError> for TriageError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TriageError> for InfraError {
    fn from(value: TriageError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTriageError {
    fn into_triage(self) -> TriageError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TriageError */
/* -------------------------------------------------------------------------- */

impl IntoTriageError for std::io::Error {
    fn into_triage(self) -> TriageError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::PermissionDenied => {
                TriageError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::NotFound => TriageError::Storage(format!("path not found: {self}")),
            _ => TriageError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_triage())
    }
}

/* -------------------------------------------------------------------------- */
/* tempfile::PersistError → TriageError */
/* -------------------------------------------------------------------------- */

impl From<tempfile::PersistError> for InfraError {
    fn from(value: tempfile::PersistError) -> Self {
        InfraError(value.error.into_triage())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TriageError / TransportError */
/* -------------------------------------------------------------------------- */

/// Classify a reqwest failure for gateway callers.
///
/// Status errors keep their code; body problems become `Decode`; everything
/// else is a `Network` failure.
pub fn transport_error(err: HttpError) -> TransportError {
    if err.is_timeout() {
        return TransportError::Network("request timed out".into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return TransportError::Network(format!("connection failed: {err}"));
    }

    if let Some(status) = err.status() {
        return TransportError::Status { status: status.as_u16(), detail: None };
    }

    if err.is_decode() || err.is_body() {
        return TransportError::Decode(err.to_string());
    }

    TransportError::Network(err.to_string())
}

impl IntoTriageError for HttpError {
    fn into_triage(self) -> TriageError {
        if self.is_builder() {
            return TriageError::Config(format!("invalid HTTP client settings: {self}"));
        }
        TriageError::Transport(transport_error(self).to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_triage())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TriageError */
/* -------------------------------------------------------------------------- */

impl IntoTriageError for serde_json::Error {
    fn into_triage(self) -> TriageError {
        TriageError::Internal(format!("JSON error: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_triage())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
