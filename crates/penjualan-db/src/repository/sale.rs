//! # Sale Header Repository
//!
//! Database operations for the `penjualan` table.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                │
//! │                                                                     │
//! │  1. CREATE                                                          │
//! │     └── insert() with caller-supplied fields (no items exist yet)   │
//! │                                                                     │
//! │  2. ITEM WRITES (see SaleItemRepository)                            │
//! │     └── update_grand_total() after each item insert                 │
//! │                                                                     │
//! │  3. UPDATE                                                          │
//! │     └── update() overwrites all four fields, grand_total included   │
//! │                                                                     │
//! │  4. DELETE                                                          │
//! │     └── handler deletes the items first, then delete() the header   │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Update and delete are intentionally silent when the id doesn't exist:
//! zero rows affected is a success, matching the API contract.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use penjualan_core::{NewSale, Sale};

/// Repository for sale header database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Returns all sales, unfiltered, in storage default order.
    pub async fn list(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT
                id_penjualan,
                no_faktur,
                tanggal_faktur,
                nama_customer,
                grand_total
            FROM penjualan
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT
                id_penjualan,
                no_faktur,
                tanggal_faktur,
                nama_customer,
                grand_total
            FROM penjualan
            WHERE id_penjualan = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Inserts a new sale header, returning the generated id.
    ///
    /// `grand_total` is caller-supplied here: no items exist yet at create
    /// time, so there is nothing to derive it from.
    pub async fn insert(&self, sale: &NewSale) -> DbResult<i64> {
        debug!(no_faktur = ?sale.no_faktur, "Inserting sale");

        let result = sqlx::query(
            r#"
            INSERT INTO penjualan (no_faktur, tanggal_faktur, nama_customer, grand_total)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&sale.no_faktur)
        .bind(&sale.tanggal_faktur)
        .bind(&sale.nama_customer)
        .bind(sale.grand_total)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrites all four mutable fields of a sale by id.
    ///
    /// Returns the number of rows affected. A missing id affects zero rows
    /// and is NOT an error.
    pub async fn update(&self, id: i64, sale: &NewSale) -> DbResult<u64> {
        debug!(id, "Updating sale");

        let result = sqlx::query(
            r#"
            UPDATE penjualan
            SET no_faktur = ?1,
                tanggal_faktur = ?2,
                nama_customer = ?3,
                grand_total = ?4
            WHERE id_penjualan = ?5
            "#,
        )
        .bind(&sale.no_faktur)
        .bind(&sale.tanggal_faktur)
        .bind(&sale.nama_customer)
        .bind(sale.grand_total)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Writes the recomputed grand total back to the header.
    ///
    /// ## When To Call
    /// After an item insert, with the sum of the re-read line totals.
    pub async fn update_grand_total(&self, id: i64, grand_total: f64) -> DbResult<u64> {
        debug!(id, grand_total, "Updating grand total");

        let result = sqlx::query(
            r#"
            UPDATE penjualan SET grand_total = ?1 WHERE id_penjualan = ?2
            "#,
        )
        .bind(grand_total)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the sale header row only.
    ///
    /// The caller must delete the sale's items first: foreign keys are
    /// enforced and there is no database-level cascade.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting sale");

        let result = sqlx::query("DELETE FROM penjualan WHERE id_penjualan = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
