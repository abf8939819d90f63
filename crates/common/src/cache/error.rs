//! Cache error types
//!
//! The caches perform no I/O, so the only failure is a caller handing a
//! type-erased handle that does not wrap the cache's value type.

use std::time::Duration;

use thiserror::Error;

use crate::error::{ErrorClassification, ErrorSeverity};

/// Cache error type
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("handle does not wrap a value of type `{expected}`")]
    TypeMismatch { expected: &'static str },
}

/// Cache result type
pub type CacheResult<T> = Result<T, CacheError>;

impl CacheError {
    pub(crate) fn type_mismatch<T>() -> Self {
        Self::TypeMismatch { expected: std::any::type_name::<T>() }
    }
}

impl ErrorClassification for CacheError {
    /// A mismatched handle fails the same way on every attempt.
    fn is_retryable(&self) -> bool {
        match self {
            Self::TypeMismatch { .. } => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TypeMismatch { .. } => ErrorSeverity::Error,
        }
    }

    fn is_critical(&self) -> bool {
        match self {
            Self::TypeMismatch { .. } => false,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::TypeMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::error.
    use super::*;

    /// Validates `CacheError::type_mismatch` behavior for the display
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the expected type name appears in the message.
    /// - Ensures the error is neither retryable nor critical.
    #[test]
    fn test_type_mismatch_classification() {
        let err = CacheError::type_mismatch::<i32>();

        assert_eq!(err.to_string(), "handle does not wrap a value of type `i32`");
        assert!(!err.is_retryable());
        assert!(!err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.retry_after(), None);
    }
}
