//! # Error Types
//!
//! Domain-specific error types for voucher-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  voucher-core errors (this file)                                    │
//! │  ├── ValidationError  - Input validation failures                   │
//! │  ├── StoreError       - What the persistence trait surfaces         │
//! │  └── VoucherError     - Service-level union of the above            │
//! │                                                                     │
//! │  voucher-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  Flow: ValidationError ──┐                                          │
//! │        DbError → StoreError ──► VoucherError ──► API layer          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are detected before any store access, so a validation failure
/// guarantees zero side effects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., disallowed characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures surfaced by a [`crate::store::VoucherStore`] implementation.
///
/// `Conflict` is the unique-code violation at insert time. Everything else
/// the backend reports is passed through as `Backend`, untranslated; the
/// core never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A voucher with this code already exists.
    #[error("voucher code '{code}' already exists")]
    Conflict { code: String },

    /// Persistence or connectivity failure, propagated from the backend.
    #[error("store failure: {0}")]
    Backend(String),
}

// =============================================================================
// Voucher Error
// =============================================================================

/// Service-level errors returned by the create and apply operations.
///
/// An ineligible redemption (unknown code, already used, amount below the
/// policy threshold) is NOT an error; it is a [`crate::types::Redemption`]
/// with `applied = false`.
#[derive(Debug, Error)]
pub enum VoucherError {
    /// Malformed input, rejected before any store access.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Creation attempted with a code that already exists.
    #[error("voucher code '{code}' already exists")]
    Conflict { code: String },

    /// Persistence failure, propagated unmodified.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for VoucherError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { code } => VoucherError::Conflict { code },
            other => VoucherError::Store(other),
        }
    }
}

/// Convenience type alias for Results with VoucherError.
pub type VoucherResult<T> = Result<T, VoucherError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 10000");
    }

    #[test]
    fn test_store_conflict_becomes_voucher_conflict() {
        let store_err = StoreError::Conflict {
            code: "SAVE20".to_string(),
        };
        let err: VoucherError = store_err.into();
        assert!(matches!(err, VoucherError::Conflict { ref code } if code == "SAVE20"));
    }

    #[test]
    fn test_backend_error_passes_through() {
        let store_err = StoreError::Backend("connection reset".to_string());
        let err: VoucherError = store_err.into();
        assert_eq!(err.to_string(), "store failure: connection reset");
    }

    #[test]
    fn test_validation_converts_to_voucher_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let err: VoucherError = validation_err.into();
        assert!(matches!(err, VoucherError::Validation(_)));
    }
}
