//! # voucher-core: Voucher Business Logic
//!
//! This crate is the heart of the voucher service. It decides whether a
//! voucher may be created, whether a redemption applies, and what the
//! discounted amount is. Persistence is an injected collaborator.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Voucher Service                             │
//! │                                                                 │
//! │  API layer (external)                                           │
//! │       │  create_voucher / apply_voucher                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │              ★ voucher-core (THIS CRATE) ★                │  │
//! │  │                                                           │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌────────────┐  │  │
//! │  │   │  types  │ │  money  │ │ validation │ │  service   │  │  │
//! │  │   │ Voucher │ │  Money  │ │   rules    │ │ lifecycle  │  │  │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └────────────┘  │  │
//! │  │                                                           │  │
//! │  │   VoucherStore trait ──► implemented by voucher-db        │  │
//! │  │                          (and MemoryVoucherStore here)    │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Voucher, Redemption, policies)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`store`] - The persistence trait and an in-memory implementation
//! - [`service`] - The create/apply operations
//!
//! ## Design Principles
//!
//! 1. **Injected persistence**: business logic never reaches into a global
//!    database handle; it talks to a [`store::VoucherStore`]
//! 2. **Integer money**: all monetary values are minor units (i64 cents)
//! 3. **Explicit outcomes**: every failure is a typed variant, never a
//!    sentinel value or a panic

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, ValidationError, VoucherError};
pub use money::Money;
pub use service::VoucherService;
pub use store::{MemoryVoucherStore, VoucherStore};
pub use types::{DiscountRate, Redemption, RedemptionPolicy, Voucher};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a voucher code.
pub const MAX_CODE_LEN: usize = 64;

/// Maximum discount in basis points (10_000 bps = 100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Default minimum purchase amount, in cents, for a discount to apply.
///
/// A redemption against a smaller amount is a graceful no-op, not an error.
/// Override per service with [`types::RedemptionPolicy`].
pub const DEFAULT_MIN_REDEMPTION_CENTS: i64 = 100;
