//! # Voucher Store
//!
//! The persistence trait the service is built against, plus an in-memory
//! implementation for tests and embedding.
//!
//! The trait is the seam between decision logic and storage: voucher-db
//! implements it over SQLite, and [`MemoryVoucherStore`] implements it over
//! a mutex-guarded map with identical semantics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;
use crate::types::Voucher;

// =============================================================================
// Store Trait
// =============================================================================

/// Persistence operations for the voucher entity.
///
/// ## Contract
/// - `insert` fails with [`StoreError::Conflict`] when the code already
///   exists; it never overwrites.
/// - `find_by_code` returns `Ok(None)` for unknown codes - absence is not
///   an error.
/// - `mark_used` is a conditional update: it sets `used = true` only if the
///   flag is currently false, and reports whether this call performed the
///   transition. Under concurrent callers, exactly one receives `true`.
#[async_trait]
pub trait VoucherStore: Send + Sync {
    /// Inserts a new voucher record.
    async fn insert(&self, voucher: &Voucher) -> Result<(), StoreError>;

    /// Fetches a voucher by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, StoreError>;

    /// Conditionally flips `used` from false to true.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// voucher was already used or does not exist.
    async fn mark_used(&self, code: &str, redeemed_at: DateTime<Utc>) -> Result<bool, StoreError>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory [`VoucherStore`] backed by a mutex-guarded map.
///
/// Keeps the same uniqueness and conditional-update semantics as the SQLite
/// adapter, so service behavior can be tested without a database.
///
/// ## Usage
/// ```rust
/// use voucher_core::{MemoryVoucherStore, VoucherService};
///
/// let service = VoucherService::new(MemoryVoucherStore::new());
/// ```
#[derive(Debug, Default)]
pub struct MemoryVoucherStore {
    vouchers: Mutex<HashMap<String, Voucher>>,
}

impl MemoryVoucherStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryVoucherStore::default()
    }

    /// Returns the number of stored vouchers.
    pub fn len(&self) -> usize {
        self.vouchers.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Voucher>>, StoreError> {
        self.vouchers
            .lock()
            .map_err(|_| StoreError::Backend("voucher store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl VoucherStore for MemoryVoucherStore {
    async fn insert(&self, voucher: &Voucher) -> Result<(), StoreError> {
        let mut vouchers = self.locked()?;

        if vouchers.contains_key(&voucher.code) {
            return Err(StoreError::Conflict {
                code: voucher.code.clone(),
            });
        }

        vouchers.insert(voucher.code.clone(), voucher.clone());
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, StoreError> {
        let vouchers = self.locked()?;
        Ok(vouchers.get(code).cloned())
    }

    async fn mark_used(&self, code: &str, redeemed_at: DateTime<Utc>) -> Result<bool, StoreError> {
        let mut vouchers = self.locked()?;

        match vouchers.get_mut(code) {
            Some(voucher) if !voucher.used => {
                voucher.used = true;
                voucher.redeemed_at = Some(redeemed_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn voucher(code: &str) -> Voucher {
        Voucher {
            id: "test-id".to_string(),
            code: code.to_string(),
            discount_bps: 2000,
            used: false,
            created_at: Utc::now(),
            redeemed_at: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryVoucherStore::new();
        store.insert(&voucher("SAVE20")).await.unwrap();

        let found = store.find_by_code("SAVE20").await.unwrap().unwrap();
        assert_eq!(found.code, "SAVE20");
        assert!(!found.used);

        assert!(store.find_by_code("MISSING").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_conflicts() {
        let store = MemoryVoucherStore::new();
        store.insert(&voucher("SAVE20")).await.unwrap();

        let err = store.insert(&voucher("SAVE20")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { ref code } if code == "SAVE20"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_mark_used_flips_once() {
        let store = MemoryVoucherStore::new();
        store.insert(&voucher("SAVE20")).await.unwrap();

        let now = Utc::now();
        assert!(store.mark_used("SAVE20", now).await.unwrap());
        // Second attempt observes the flag already set
        assert!(!store.mark_used("SAVE20", now).await.unwrap());

        let found = store.find_by_code("SAVE20").await.unwrap().unwrap();
        assert!(found.used);
        assert_eq!(found.redeemed_at, Some(now));
    }

    #[tokio::test]
    async fn test_mark_used_missing_code() {
        let store = MemoryVoucherStore::new();
        assert!(!store.mark_used("MISSING", Utc::now()).await.unwrap());
    }
}
