//! # Sale Line-Item Handlers
//!
//! Item create/update under a sale, with the grand-total recomputation.
//!
//! ## Add-Item Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  POST /api/sales/{id}/items                                         │
//! │                                                                     │
//! │  1. parse qty_barang and price          → 400 on non-numeric input  │
//! │  2. INSERT the item (total = qty×price)                             │
//! │  3. SELECT all line totals for the sale                             │
//! │  4. UPDATE the header's grand_total to their sum                    │
//! │                                                                     │
//! │  Steps 2-4 are independent statements. Concurrent adds to the same  │
//! │  sale can interleave at each await and undercount each other        │
//! │  (lost update). Accepted: see DESIGN.md.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! PUT runs steps 1-2 only: an item edit leaves the header total stale.
//! Every failure on these endpoints - validation or storage - surfaces as
//! 400 with the error message; both quirks are part of the API contract.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use penjualan_core::{grand_total, parse_amount, NewSaleItem, RawNumber};
use penjualan_db::Database;

use crate::error::ApiError;

/// Request body shared by item create and update.
///
/// `qty_barang` and `price` accept JSON numbers or numeric strings; anything
/// else fails the numeric validation in [`parse_amount`].
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRequest {
    pub nama_barang: Option<String>,
    pub qty_barang: Option<RawNumber>,
    pub price: Option<RawNumber>,
}

impl ItemRequest {
    /// Validates the amounts and builds the insert payload.
    fn into_new_item(self) -> Result<NewSaleItem, ApiError> {
        let qty = parse_amount(self.qty_barang.as_ref())?;
        let price = parse_amount(self.price.as_ref())?;

        Ok(NewSaleItem::new(self.nama_barang, qty, price))
    }
}

/// POST /api/sales/{id}/items - add an item and recompute the header total.
pub async fn add_item(
    State(db): State<Database>,
    Path(sale_id): Path<i64>,
    Json(req): Json<ItemRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let item = req.into_new_item()?;

    db.sale_items()
        .insert(sale_id, &item)
        .await
        .map_err(ApiError::bad_request)?;

    // Re-read every line total and write the sum back to the header.
    let totals = db
        .sale_items()
        .line_totals(sale_id)
        .await
        .map_err(ApiError::bad_request)?;
    let total = grand_total(totals);

    db.sales()
        .update_grand_total(sale_id, total)
        .await
        .map_err(ApiError::bad_request)?;

    info!(sale_id, grand_total = total, "Sale item added");
    Ok((StatusCode::CREATED, "Item penjualan berhasil ditambahkan"))
}

/// PUT /api/sales/{id}/items/{item_id} - edit an item in place.
///
/// Does NOT recompute the header's grand_total. Updating a missing
/// (sale, item) pair succeeds silently.
pub async fn update_item(
    State(db): State<Database>,
    Path((sale_id, item_id)): Path<(i64, i64)>,
    Json(req): Json<ItemRequest>,
) -> Result<&'static str, ApiError> {
    let item = req.into_new_item()?;

    db.sale_items()
        .update(sale_id, item_id, &item)
        .await
        .map_err(ApiError::bad_request)?;

    info!(sale_id, item_id, "Sale item updated");
    Ok("Item penjualan berhasil diperbarui")
}
