//! # Voucher Repository
//!
//! Database operations for vouchers.
//!
//! ## Key Operations
//! - Insert with the UNIQUE constraint on `code` deciding conflicts
//! - Lookup by code
//! - Conditional used-flag update (the redemption guard)
//!
//! ## Redemption Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    At-Most-One Redemption                           │
//! │                                                                     │
//! │  Invariant: `used` transitions 0 → 1 exactly once per voucher,      │
//! │  even under concurrent callers.                                     │
//! │                                                                     │
//! │  Check and write are one statement:                                 │
//! │                                                                     │
//! │    UPDATE vouchers SET used = 1 WHERE code = ? AND used = 0         │
//! │                                                                     │
//! │  SQLite executes it atomically; rows_affected tells the caller      │
//! │  whether it was the one that flipped the flag. A separate           │
//! │  SELECT-then-UPDATE sequence would let two callers both observe     │
//! │  used = 0 and both report success.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use voucher_core::{StoreError, Voucher, VoucherStore};

/// Repository for voucher database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.vouchers();
///
/// repo.insert(&voucher).await?;
/// let found = repo.find_by_code("WELCOME10").await?;
/// ```
#[derive(Debug, Clone)]
pub struct VoucherRepository {
    pool: SqlitePool,
}

impl VoucherRepository {
    /// Creates a new VoucherRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VoucherRepository { pool }
    }

    /// Inserts a new voucher.
    ///
    /// ## Returns
    /// * `Ok(())` - Voucher inserted
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn insert(&self, voucher: &Voucher) -> DbResult<()> {
        debug!(code = %voucher.code, "Inserting voucher");

        sqlx::query(
            r#"
            INSERT INTO vouchers (
                id, code, discount_bps, used, created_at, redeemed_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&voucher.id)
        .bind(&voucher.code)
        .bind(voucher.discount_bps)
        .bind(voucher.used)
        .bind(voucher.created_at)
        .bind(voucher.redeemed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetches a voucher by its code.
    ///
    /// ## Returns
    /// * `Ok(Some(Voucher))` - Voucher found
    /// * `Ok(None)` - No voucher with this code
    pub async fn find_by_code(&self, code: &str) -> DbResult<Option<Voucher>> {
        let voucher = sqlx::query_as::<_, Voucher>(
            r#"
            SELECT id, code, discount_bps, used, created_at, redeemed_at
            FROM vouchers
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(voucher)
    }

    /// Conditionally marks a voucher as used.
    ///
    /// Single-statement compare-and-set: the flag flips only if it is
    /// currently unset, and `rows_affected` reports whether this call
    /// performed the transition. Concurrent callers get exactly one `true`.
    pub async fn mark_used(&self, code: &str, redeemed_at: DateTime<Utc>) -> DbResult<bool> {
        debug!(code = %code, "Marking voucher used");

        let result = sqlx::query(
            r#"
            UPDATE vouchers
            SET used = 1, redeemed_at = ?2
            WHERE code = ?1 AND used = 0
            "#,
        )
        .bind(code)
        .bind(redeemed_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Counts stored vouchers (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vouchers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Store Trait Implementation
// =============================================================================

#[async_trait]
impl VoucherStore for VoucherRepository {
    async fn insert(&self, voucher: &Voucher) -> Result<(), StoreError> {
        match VoucherRepository::insert(self, voucher).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_unique_violation() => Err(StoreError::Conflict {
                code: voucher.code.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, StoreError> {
        VoucherRepository::find_by_code(self, code)
            .await
            .map_err(StoreError::from)
    }

    async fn mark_used(&self, code: &str, redeemed_at: DateTime<Utc>) -> Result<bool, StoreError> {
        VoucherRepository::mark_used(self, code, redeemed_at)
            .await
            .map_err(StoreError::from)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use std::sync::Arc;
    use voucher_core::{DiscountRate, Money, VoucherError, VoucherService};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn voucher(code: &str, discount_bps: u32) -> Voucher {
        Voucher {
            id: format!("id-{code}"),
            code: code.to_string(),
            discount_bps,
            used: false,
            created_at: Utc::now(),
            redeemed_at: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_roundtrip() {
        let db = test_db().await;
        let repo = db.vouchers();

        repo.insert(&voucher("WELCOME10", 1000)).await.unwrap();

        let found = repo.find_by_code("WELCOME10").await.unwrap().unwrap();
        assert_eq!(found.code, "WELCOME10");
        assert_eq!(found.discount_bps, 1000);
        assert!(!found.used);
        assert!(found.redeemed_at.is_none());

        assert!(repo.find_by_code("MISSING").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_is_unique_violation() {
        let db = test_db().await;
        let repo = db.vouchers();

        repo.insert(&voucher("SAVE20", 2000)).await.unwrap();

        let err = repo.insert(&voucher("SAVE20", 500)).await.unwrap_err();
        assert!(err.is_unique_violation());

        // First record untouched
        let found = repo.find_by_code("SAVE20").await.unwrap().unwrap();
        assert_eq!(found.discount_bps, 2000);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_used_is_conditional() {
        let db = test_db().await;
        let repo = db.vouchers();

        repo.insert(&voucher("SAVE20", 2000)).await.unwrap();

        let now = Utc::now();
        assert!(repo.mark_used("SAVE20", now).await.unwrap());
        assert!(!repo.mark_used("SAVE20", now).await.unwrap());
        assert!(!repo.mark_used("MISSING", now).await.unwrap());

        let found = repo.find_by_code("SAVE20").await.unwrap().unwrap();
        assert!(found.used);
        assert!(found.redeemed_at.is_some());
    }

    #[tokio::test]
    async fn test_service_over_sqlite_full_lifecycle() {
        let db = test_db().await;
        let service = VoucherService::new(db.vouchers());

        service
            .create_voucher("SAVE20", DiscountRate::from_bps(2000))
            .await
            .unwrap();

        let outcome = service
            .apply_voucher("SAVE20", Money::from_cents(500))
            .await
            .unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.final_amount_cents, 400);

        // Second attempt is a graceful no-op
        let again = service
            .apply_voucher("SAVE20", Money::from_cents(500))
            .await
            .unwrap();
        assert!(!again.applied);
        assert_eq!(again.final_amount_cents, 500);
    }

    #[tokio::test]
    async fn test_service_over_sqlite_conflict() {
        let db = test_db().await;
        let service = VoucherService::new(db.vouchers());

        service
            .create_voucher("SAVE20", DiscountRate::from_bps(2000))
            .await
            .unwrap();

        let err = service
            .create_voucher("SAVE20", DiscountRate::from_bps(500))
            .await
            .unwrap_err();
        assert!(matches!(err, VoucherError::Conflict { ref code } if code == "SAVE20"));
    }

    #[tokio::test]
    async fn test_concurrent_redemptions_through_sqlite() {
        let db = test_db().await;
        let service = Arc::new(VoucherService::new(db.vouchers()));

        service
            .create_voucher("RACE", DiscountRate::from_bps(2000))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.apply_voucher("RACE", Money::from_cents(500)).await
            }));
        }

        let mut applied_count = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().applied {
                applied_count += 1;
            }
        }

        assert_eq!(applied_count, 1);
    }
}
