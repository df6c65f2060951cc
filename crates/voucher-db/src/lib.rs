//! # voucher-db: Database Layer for the Voucher Service
//!
//! SQLite persistence for vouchers, using sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Voucher Data Flow                          │
//! │                                                                 │
//! │  VoucherService (voucher-core)                                  │
//! │       │  via the VoucherStore trait                             │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  voucher-db (THIS CRATE)                  │  │
//! │  │                                                           │  │
//! │  │   ┌────────────┐  ┌───────────────────┐  ┌────────────┐  │  │
//! │  │   │  Database  │  │ VoucherRepository │  │ Migrations │  │  │
//! │  │   │ (pool.rs)  │◄─│  (repository/)    │  │ (embedded) │  │  │
//! │  │   └────────────┘  └───────────────────┘  └────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite database (WAL mode)                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The voucher repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voucher_core::VoucherService;
//! use voucher_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/vouchers.db")).await?;
//! let service = VoucherService::new(db.vouchers());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::voucher::VoucherRepository;
