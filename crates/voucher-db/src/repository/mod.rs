//! # Repository Module
//!
//! Database repository implementations.
//!
//! [`voucher::VoucherRepository`] is the SQLite adapter behind
//! voucher-core's `VoucherStore` trait: the service talks to the trait,
//! the repository owns the SQL.

pub mod voucher;
