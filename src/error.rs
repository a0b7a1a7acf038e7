//! Selector and Backend Errors
//!
//! `TigerStyle`: Explicit error types with context.
//!
//! The selector validates exactly one thing: the backend tag at
//! construction. Everything else that can fail originates inside a
//! backend and passes through the selector untouched.

use thiserror::Error;

// =============================================================================
// Backend Errors
// =============================================================================

/// Errors originating inside a backend adapter.
///
/// The selector never wraps, retries, or interprets these.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Backend configuration is invalid
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// What was wrong with the config
        message: String,
    },

    /// Connection to the underlying engine failed
    #[error("connection error: {message}")]
    Connection {
        /// Connection error message
        message: String,
    },

    /// Query-layer failure inside the engine
    #[error("query error: {message}")]
    Query {
        /// Query error message
        message: String,
    },

    /// Simulated fault (for testing)
    #[error("simulated fault: {operation}")]
    SimulatedFault {
        /// Operation during which the fault fired
        operation: String,
    },
}

impl BackendError {
    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a simulated fault error.
    #[must_use]
    pub fn simulated_fault(operation: impl Into<String>) -> Self {
        Self::SimulatedFault {
            operation: operation.into(),
        }
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

// =============================================================================
// Selector Errors
// =============================================================================

/// Errors from the backend selector facade.
#[derive(Debug, Clone, Error)]
pub enum SelectorError {
    /// The backend tag matched none of the enumerated kinds.
    ///
    /// Raised synchronously at construction, before any backend is
    /// created, so partially constructed state never leaks.
    #[error("unsupported backend kind: {kind:?}")]
    UnsupportedBackendKind {
        /// The unrecognized tag, verbatim
        kind: String,
    },

    /// A backend-originated error, propagated unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl SelectorError {
    /// Create an unsupported backend kind error.
    #[must_use]
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedBackendKind { kind: kind.into() }
    }
}

/// Result type for selector operations.
pub type SelectorResult<T> = Result<T, SelectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = BackendError::invalid_config("missing connection");
        assert!(matches!(err, BackendError::InvalidConfig { message } if message == "missing connection"));

        let err = SelectorError::unsupported_kind("mongoORM");
        assert!(matches!(err, SelectorError::UnsupportedBackendKind { kind } if kind == "mongoORM"));
    }

    #[test]
    fn test_backend_error_passes_through() {
        let backend_err = BackendError::connection("refused");
        let selector_err: SelectorError = backend_err.into();

        // Transparent: the display text is the backend's, unwrapped.
        assert_eq!(selector_err.to_string(), "connection error: refused");
    }

    #[test]
    fn test_unsupported_kind_display_quotes_tag() {
        let err = SelectorError::unsupported_kind("");
        assert_eq!(err.to_string(), "unsupported backend kind: \"\"");
    }
}
