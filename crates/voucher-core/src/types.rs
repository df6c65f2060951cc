//! # Domain Types
//!
//! Core domain types for the voucher service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐   │
//! │  │    Voucher      │   │   Redemption    │   │ RedemptionPolicy │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │   │
//! │  │  id (UUID)      │   │  amount_cents   │   │  min_amount      │   │
//! │  │  code (unique)  │   │  discount_bps   │   │                  │   │
//! │  │  discount_bps   │   │  final_amount   │   └──────────────────┘   │
//! │  │  used           │   │  applied        │                          │
//! │  └─────────────────┘   └─────────────────┘                          │
//! │                                                                     │
//! │  ┌─────────────────┐                                                │
//! │  │  DiscountRate   │   bps (u32), 2000 = 20%                        │
//! │  └─────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A voucher has:
//! - `id`: UUID v4 - immutable surrogate key
//! - `code`: unique business identifier, what customers type at checkout

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::DEFAULT_MIN_REDEMPTION_CENTS;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 2000 bps = 20%. Basis points keep
/// "integer or decimal" percentages in integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(15.0).bps(), 1500);
    /// assert_eq!(DiscountRate::from_percentage(8.25).bps(), 825);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Voucher
// =============================================================================

/// A persisted discount entitlement identified by a unique code.
///
/// Lifecycle: created once (`used = false`), read zero or more times during
/// redemption attempts, and mutated at most once when a redemption succeeds.
/// The `used` flag never transitions back to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Voucher {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Voucher code - business identifier, unique across all vouchers.
    pub code: String,

    /// Discount in basis points (2000 = 20%).
    pub discount_bps: u32,

    /// Whether the voucher has been redeemed.
    pub used: bool,

    /// When the voucher was created.
    pub created_at: DateTime<Utc>,

    /// When the voucher was redeemed, if it has been.
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl Voucher {
    /// Returns the discount as a typed rate.
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_bps)
    }
}

// =============================================================================
// Redemption
// =============================================================================

/// The outcome of an apply-voucher call.
///
/// Always fully populated: on the no-op paths (unknown code, already used,
/// amount below threshold) the caller still needs the unchanged amount, so
/// those return `applied = false` with a zero discount rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    /// The purchase amount the discount was evaluated against, in cents.
    pub amount_cents: i64,

    /// The discount that was applied, in basis points (0 when not applied).
    pub discount_bps: u32,

    /// The amount after discount, in cents (equals `amount_cents` when not applied).
    pub final_amount_cents: i64,

    /// Whether the voucher was consumed by this call.
    pub applied: bool,
}

impl Redemption {
    /// Builds the successful outcome: discount applied, voucher consumed.
    pub fn applied(amount: Money, rate: DiscountRate) -> Self {
        Redemption {
            amount_cents: amount.cents(),
            discount_bps: rate.bps(),
            final_amount_cents: amount.apply_discount(rate).cents(),
            applied: true,
        }
    }

    /// Builds the graceful no-op outcome: amount unchanged, nothing consumed.
    pub fn not_applied(amount: Money) -> Self {
        Redemption {
            amount_cents: amount.cents(),
            discount_bps: 0,
            final_amount_cents: amount.cents(),
            applied: false,
        }
    }

    /// Returns the purchase amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }

    /// Returns the final amount as Money.
    #[inline]
    pub fn final_amount(&self) -> Money {
        Money::from_cents(self.final_amount_cents)
    }
}

// =============================================================================
// Redemption Policy
// =============================================================================

/// Configurable eligibility rules for redemption.
///
/// The single rule today is the minimum purchase amount: a discount only
/// applies when the amount is large enough for it to be meaningful.
/// Defaults to [`DEFAULT_MIN_REDEMPTION_CENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionPolicy {
    /// Minimum purchase amount, in cents, for a discount to apply.
    pub min_amount_cents: i64,
}

impl RedemptionPolicy {
    /// Creates a policy with an explicit minimum amount.
    pub fn with_min_amount(min_amount: Money) -> Self {
        RedemptionPolicy {
            min_amount_cents: min_amount.cents(),
        }
    }

    /// Returns the minimum amount as Money.
    #[inline]
    pub fn min_amount(&self) -> Money {
        Money::from_cents(self.min_amount_cents)
    }
}

impl Default for RedemptionPolicy {
    fn default() -> Self {
        RedemptionPolicy {
            min_amount_cents: DEFAULT_MIN_REDEMPTION_CENTS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert!((rate.percentage() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(20.0).bps(), 2000);
        assert_eq!(DiscountRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_discount_rate_default_is_zero() {
        assert!(DiscountRate::default().is_zero());
    }

    #[test]
    fn test_redemption_applied() {
        let outcome = Redemption::applied(Money::from_cents(500), DiscountRate::from_bps(2000));
        assert_eq!(outcome.amount_cents, 500);
        assert_eq!(outcome.discount_bps, 2000);
        assert_eq!(outcome.final_amount_cents, 400);
        assert!(outcome.applied);
    }

    #[test]
    fn test_redemption_not_applied_keeps_amount() {
        let outcome = Redemption::not_applied(Money::from_cents(500));
        assert_eq!(outcome.amount_cents, 500);
        assert_eq!(outcome.discount_bps, 0);
        assert_eq!(outcome.final_amount_cents, 500);
        assert!(!outcome.applied);
    }

    #[test]
    fn test_redemption_serializes_camel_case() {
        let outcome = Redemption::applied(Money::from_cents(500), DiscountRate::from_bps(2000));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["amountCents"], 500);
        assert_eq!(json["discountBps"], 2000);
        assert_eq!(json["finalAmountCents"], 400);
        assert_eq!(json["applied"], true);
    }

    #[test]
    fn test_policy_default() {
        let policy = RedemptionPolicy::default();
        assert_eq!(policy.min_amount_cents, 100);
    }

    #[test]
    fn test_policy_override() {
        let policy = RedemptionPolicy::with_min_amount(Money::from_cents(2500));
        assert_eq!(policy.min_amount().cents(), 2500);
    }
}
