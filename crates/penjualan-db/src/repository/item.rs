//! # Sale Line-Item Repository
//!
//! Database operations for the `detail_penjualan` table.
//!
//! ## Grand-Total Recomputation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Add-Item Sequence (handler-driven)                │
//! │                                                                     │
//! │  1. insert()            → new row with stored total_price           │
//! │  2. line_totals()       → re-read ALL totals for the sale           │
//! │  3. SaleRepository::update_grand_total(sum)                         │
//! │                                                                     │
//! │  Three independent statements, no transaction: two concurrent adds  │
//! │  to the same sale can each read a total that misses the other's     │
//! │  insert (lost update). Accepted: see DESIGN.md.                     │
//! │                                                                     │
//! │  Item UPDATE runs step 1 only - the header total is left stale.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use penjualan_core::{NewSaleItem, SaleItem};

/// Repository for sale line-item database operations.
#[derive(Debug, Clone)]
pub struct SaleItemRepository {
    pool: SqlitePool,
}

impl SaleItemRepository {
    /// Creates a new SaleItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleItemRepository { pool }
    }

    /// Inserts a line item under the given sale, returning the generated id.
    ///
    /// Fails with a foreign key violation if the sale doesn't exist.
    pub async fn insert(&self, sale_id: i64, item: &NewSaleItem) -> DbResult<i64> {
        debug!(sale_id, nama_barang = ?item.nama_barang, "Inserting sale item");

        let result = sqlx::query(
            r#"
            INSERT INTO detail_penjualan (id_penjualan, nama_barang, qty_barang, price, total_price)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(sale_id)
        .bind(&item.nama_barang)
        .bind(item.qty_barang)
        .bind(item.price)
        .bind(item.total_price)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates a line item in place, keyed by (sale, item).
    ///
    /// Returns the number of rows affected; a missing pair affects zero rows
    /// and is NOT an error. Does not touch the header's grand total.
    pub async fn update(&self, sale_id: i64, item_id: i64, item: &NewSaleItem) -> DbResult<u64> {
        debug!(sale_id, item_id, "Updating sale item");

        let result = sqlx::query(
            r#"
            UPDATE detail_penjualan
            SET nama_barang = ?1,
                qty_barang = ?2,
                price = ?3,
                total_price = ?4
            WHERE id_penjualan = ?5 AND id_detail_penjualan = ?6
            "#,
        )
        .bind(&item.nama_barang)
        .bind(item.qty_barang)
        .bind(item.price)
        .bind(item.total_price)
        .bind(sale_id)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Re-reads the stored line totals of every item on a sale.
    ///
    /// This is the read half of the grand-total recomputation; the caller
    /// sums these and writes the result back to the header.
    pub async fn line_totals(&self, sale_id: i64) -> DbResult<Vec<f64>> {
        let totals = sqlx::query_scalar::<_, f64>(
            "SELECT total_price FROM detail_penjualan WHERE id_penjualan = ?1",
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    /// Returns all items belonging to a sale.
    pub async fn list_for_sale(&self, sale_id: i64) -> DbResult<Vec<SaleItem>> {
        let items = sqlx::query_as::<_, SaleItem>(
            r#"
            SELECT
                id_detail_penjualan,
                id_penjualan,
                nama_barang,
                qty_barang,
                price,
                total_price
            FROM detail_penjualan
            WHERE id_penjualan = ?1
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Deletes every item belonging to a sale.
    ///
    /// ## When To Call
    /// Before deleting the sale header: foreign keys are enforced and there
    /// is no database-level cascade.
    pub async fn delete_for_sale(&self, sale_id: i64) -> DbResult<u64> {
        debug!(sale_id, "Deleting sale items");

        let result = sqlx::query("DELETE FROM detail_penjualan WHERE id_penjualan = ?1")
            .bind(sale_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
