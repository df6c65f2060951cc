//! # Validation Module
//!
//! Input validation for the voucher operations.
//!
//! All checks run before any store access, so a rejected input has no side
//! effects. The database enforces the same rules again (NOT NULL, UNIQUE,
//! CHECK constraints) as a second layer.
//!
//! ## Usage
//! ```rust
//! use voucher_core::validation::{validate_code, validate_discount_bps};
//!
//! validate_code("WELCOME10").unwrap();
//! assert!(validate_discount_bps(10_100).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CODE_LEN, MAX_DISCOUNT_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Code Validation
// =============================================================================

/// Validates a voucher code.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
/// - Must contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use voucher_core::validation::validate_code;
///
/// assert!(validate_code("WELCOME10").is_ok());
/// assert!(validate_code("SAVE-20_B").is_ok());
/// assert!(validate_code("").is_err());
/// assert!(validate_code("has space").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validation
// =============================================================================

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%) inclusive
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a purchase amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed; it simply never meets the eligibility threshold
pub fn validate_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        // Valid codes
        assert!(validate_code("WELCOME10").is_ok());
        assert!(validate_code("ABC123XYZ0").is_ok());
        assert!(validate_code("black-friday_24").is_ok());

        // Invalid codes
        assert!(validate_code("").is_err());
        assert!(validate_code("   ").is_err());
        assert!(validate_code("has space").is_err());
        assert!(validate_code(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_code_boundary_length() {
        assert!(validate_code(&"A".repeat(64)).is_ok());
        assert!(validate_code(&"A".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps(0).is_ok());
        assert!(validate_discount_bps(1500).is_ok());
        assert!(validate_discount_bps(10_000).is_ok());

        // 101% has no meaning for a discount
        assert!(validate_discount_bps(10_100).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(Money::from_cents(0)).is_ok());
        assert!(validate_amount(Money::from_cents(500)).is_ok());
        assert!(validate_amount(Money::from_cents(-1)).is_err());
    }
}
