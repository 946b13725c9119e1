//! # Session Error Type
//!
//! Unified error shape for session entry points.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in Tally POS                           │
//! │                                                                     │
//! │  Shell call                  Session                                │
//! │  ──────────                  ───────                                │
//! │                                                                     │
//! │  remove_item(7)                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Ledger bounds check? ── CoreError::IndexOutOfRange ──┐             │
//! │       │                                               ▼             │
//! │  Sink write failed? ──── ExportFailure ───────── SessionError ──►   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Success ────────────────────────────────────────────────────────►  │
//! │                                                                     │
//! │  The shell receives `{ "code": "INDEX_OUT_OF_RANGE",                │
//! │  "message": "index 7 out of range for ledger of length 3" }`.       │
//! │                                                                     │
//! │  Manual-entry rejections stay `ValidationError` (tally-core): they  │
//! │  are expected user mistakes, recovered by leaving the form intact.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use tally_core::CoreError;

use crate::sink::ExportFailure;

/// Error returned from session entry points.
///
/// ## Serialization
/// This is what an IPC shell receives when a call fails:
/// ```json
/// {
///   "code": "EXPORT_ERROR",
///   "message": "export write failed: permission denied"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for session responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A removal/export index missed the ledger bounds.
    IndexOutOfRange,

    /// Input validation failed.
    ValidationError,

    /// The storage collaborator failed or refused the export.
    ExportError,

    /// Anything else.
    Internal,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }
}

/// Converts core errors to session errors.
impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        SessionError::new(code, err.to_string())
    }
}

/// Converts export failures to session errors.
impl From<ExportFailure> for SessionError {
    fn from(err: ExportFailure) -> Self {
        SessionError::new(ErrorCode::ExportError, err.to_string())
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: SessionError = CoreError::IndexOutOfRange { index: 7, len: 3 }.into();
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
        assert!(err.message.contains("7"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = SessionError::new(ErrorCode::ExportError, "disk full");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EXPORT_ERROR");
        assert_eq!(json["message"], "disk full");
    }
}
