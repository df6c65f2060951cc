//! # Voucher Service
//!
//! The two operations over the voucher entity: creation and redemption.
//!
//! ## Voucher Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Voucher Lifecycle                              │
//! │                                                                     │
//! │  create_voucher(code, discount)                                     │
//! │       │                                                             │
//! │       ├── invalid input ──► VoucherError::Validation (no insert)    │
//! │       ├── code exists   ──► VoucherError::Conflict   (no insert)    │
//! │       ▼                                                             │
//! │  Created(used = false)                                              │
//! │       │                                                             │
//! │  apply_voucher(code, amount)                                        │
//! │       │                                                             │
//! │       ├── unknown code      ──► applied = false (no-op result)      │
//! │       ├── already used      ──► applied = false (no-op result)      │
//! │       ├── amount below min  ──► applied = false (no-op result)      │
//! │       ▼                                                             │
//! │  Redeemed(used = true)  ──► applied = true, final = amount - disc   │
//! │       │                                                             │
//! │       └── every later attempt lands in "already used"               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The used-flag transition happens through the store's conditional update,
//! so two concurrent redemptions of the same code produce exactly one
//! `applied = true`.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::VoucherResult;
use crate::money::Money;
use crate::store::VoucherStore;
use crate::types::{DiscountRate, Redemption, RedemptionPolicy, Voucher};
use crate::validation::{validate_amount, validate_code, validate_discount_bps};

// =============================================================================
// Service
// =============================================================================

/// Voucher creation and redemption over an injected store.
///
/// ## Usage
/// ```rust
/// use voucher_core::{DiscountRate, MemoryVoucherStore, Money, VoucherService};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = VoucherService::new(MemoryVoucherStore::new());
///
/// service
///     .create_voucher("WELCOME10", DiscountRate::from_bps(1000))
///     .await
///     .unwrap();
///
/// let outcome = service
///     .apply_voucher("WELCOME10", Money::from_cents(500))
///     .await
///     .unwrap();
/// assert!(outcome.applied);
/// assert_eq!(outcome.final_amount_cents, 450);
/// # });
/// ```
#[derive(Debug)]
pub struct VoucherService<S> {
    store: S,
    policy: RedemptionPolicy,
}

impl<S: VoucherStore> VoucherService<S> {
    /// Creates a service with the default redemption policy.
    pub fn new(store: S) -> Self {
        VoucherService::with_policy(store, RedemptionPolicy::default())
    }

    /// Creates a service with an explicit redemption policy.
    pub fn with_policy(store: S, policy: RedemptionPolicy) -> Self {
        VoucherService { store, policy }
    }

    /// Returns the active redemption policy.
    pub fn policy(&self) -> RedemptionPolicy {
        self.policy
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a new voucher.
    ///
    /// Input is validated before any store access; a rejected code or
    /// discount performs zero inserts. A duplicate code surfaces as
    /// [`crate::VoucherError::Conflict`], distinct from validation failures,
    /// and leaves the existing record untouched.
    ///
    /// Codes are stored and looked up in trimmed form.
    pub async fn create_voucher(&self, code: &str, discount: DiscountRate) -> VoucherResult<Voucher> {
        validate_code(code)?;
        validate_discount_bps(discount.bps())?;

        let code = code.trim();
        debug!(code = %code, discount_bps = discount.bps(), "Creating voucher");

        let voucher = Voucher {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            discount_bps: discount.bps(),
            used: false,
            created_at: Utc::now(),
            redeemed_at: None,
        };

        self.store.insert(&voucher).await?;

        info!(code = %voucher.code, discount_bps = voucher.discount_bps, "Voucher created");
        Ok(voucher)
    }

    /// Applies a voucher to a purchase amount, consuming it on success.
    ///
    /// Returns an error only for invalid input (empty code, negative
    /// amount). An unknown code, an already-used voucher, or an amount
    /// below the policy minimum are normal outcomes: the caller still gets
    /// the full result record, with `applied = false` and the amount
    /// unchanged, and nothing is persisted.
    ///
    /// The used flag is flipped through the store's conditional update;
    /// a concurrent redemption that loses the race observes the no-op
    /// outcome.
    pub async fn apply_voucher(&self, code: &str, amount: Money) -> VoucherResult<Redemption> {
        validate_code(code)?;
        validate_amount(amount)?;

        let code = code.trim();
        debug!(code = %code, amount = %amount, "Applying voucher");

        let voucher = match self.store.find_by_code(code).await? {
            Some(voucher) => voucher,
            None => {
                debug!(code = %code, "Voucher not found, skipping");
                return Ok(Redemption::not_applied(amount));
            }
        };

        if voucher.used {
            debug!(code = %code, "Voucher already used, skipping");
            return Ok(Redemption::not_applied(amount));
        }

        if amount < self.policy.min_amount() {
            debug!(
                code = %code,
                amount = %amount,
                min_amount = %self.policy.min_amount(),
                "Amount below redemption minimum, skipping"
            );
            return Ok(Redemption::not_applied(amount));
        }

        // Conditional update: only the caller that flips the flag applies
        // the discount.
        if !self.store.mark_used(code, Utc::now()).await? {
            debug!(code = %code, "Lost redemption race, skipping");
            return Ok(Redemption::not_applied(amount));
        }

        let outcome = Redemption::applied(amount, voucher.discount());
        info!(
            code = %code,
            amount = %outcome.amount(),
            final_amount = %outcome.final_amount(),
            "Voucher redeemed"
        );
        Ok(outcome)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
