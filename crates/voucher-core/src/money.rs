//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All amounts are integer minor units (cents). Discount math happens in
//! i128 with round-half-up, so `$10.00` at 8.25% off discounts 83 cents,
//! never a float in sight.
//!
//! ## Usage
//! ```rust
//! use voucher_core::money::Money;
//! use voucher_core::types::DiscountRate;
//!
//! let amount = Money::from_cents(500);
//! let rate = DiscountRate::from_bps(2000); // 20%
//!
//! assert_eq!(amount.discount_amount(rate).cents(), 100);
//! assert_eq!(amount.apply_discount(rate).cents(), 400);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that refund-style negatives remain representable, though the
/// service rejects negative purchase amounts up front.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the discount amount for a given rate.
    ///
    /// ## Implementation
    /// Integer math in i128: `(amount_cents * bps + 5000) / 10000`.
    /// The +5000 rounds half up; i128 prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::money::Money;
    /// use voucher_core::types::DiscountRate;
    ///
    /// let amount = Money::from_cents(1000); // $10.00
    /// let rate = DiscountRate::from_bps(825); // 8.25%
    ///
    /// // $10.00 × 8.25% = $0.825 → rounds to $0.83 (83 cents)
    /// assert_eq!(amount.discount_amount(rate).cents(), 83);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Applies a percentage discount and returns the reduced amount.
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::money::Money;
    /// use voucher_core::types::DiscountRate;
    ///
    /// let amount = Money::from_cents(10000); // $100.00
    /// let discounted = amount.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.cents(), 9000); // $90.00
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        *self - self.discount_amount(rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// For debugging and logs; callers handle localized formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
        c -= b;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_discount_amount_exact() {
        // 500 at 20% = 100
        let amount = Money::from_cents(500);
        let rate = DiscountRate::from_bps(2000);
        assert_eq!(amount.discount_amount(rate).cents(), 100);
    }

    #[test]
    fn test_discount_amount_with_rounding() {
        // $10.00 at 8.25% = $0.825 → $0.83 with half-up rounding
        let amount = Money::from_cents(1000);
        let rate = DiscountRate::from_bps(825);
        assert_eq!(amount.discount_amount(rate).cents(), 83);
    }

    #[test]
    fn test_apply_discount() {
        let amount = Money::from_cents(500);
        assert_eq!(amount.apply_discount(DiscountRate::from_bps(2000)).cents(), 400);
        assert_eq!(amount.apply_discount(DiscountRate::zero()).cents(), 500);
        assert_eq!(amount.apply_discount(DiscountRate::from_bps(10_000)).cents(), 0);
    }

    #[test]
    fn test_large_amount_no_overflow() {
        let amount = Money::from_cents(i64::MAX / 2);
        let rate = DiscountRate::from_bps(9999);
        // Must not panic; result stays below the original amount
        assert!(amount.apply_discount(rate) < amount);
    }
}
