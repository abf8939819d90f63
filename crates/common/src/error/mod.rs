//! Error classification shared across modules
//!
//! Module-specific error enums (built with `thiserror`) implement
//! [`ErrorClassification`] so callers can decide on retries and alerting
//! without matching on every variant:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum CacheError {
//!     #[error("handle does not wrap a value of type `{expected}`")]
//!     TypeMismatch { expected: &'static str },
//! }
//!
//! impl ErrorClassification for CacheError {
//!     fn is_retryable(&self) -> bool {
//!         false
//!     }
//!     // ... implement other trait methods
//! }
//! ```
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case |
//! |-------|----------|
//! | **Info** | Informational, expected conditions |
//! | **Warning** | Degraded but operational |
//! | **Error** | Failure requiring attention, usually a caller mistake |
//! | **Critical** | Broken invariant, system integrity at risk |

use std::fmt;
use std::time::Duration;

/// Error classification trait for consistent error handling across modules
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retryable errors are transient: the same call may succeed if
    /// attempted again.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for error.
    use super::*;

    /// Validates `ErrorSeverity` ordering and display.
    ///
    /// Assertions:
    /// - Ensures severities order from Info to Critical.
    /// - Confirms each level renders its short label.
    #[test]
    fn test_severity_order_and_display() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);

        assert_eq!(ErrorSeverity::Info.to_string(), "INFO");
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
        assert_eq!(ErrorSeverity::Error.to_string(), "ERROR");
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
