//! # Sale Header Handlers
//!
//! CRUD over `penjualan` rows. Storage failures on these endpoints map to
//! 500 with a masked message.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use penjualan_core::{NewSale, Sale};
use penjualan_db::Database;

use crate::error::ApiError;

/// Request body shared by sale create and update.
///
/// Every field is optional: absent fields are passed through to storage as
/// NULL, matching the no-validation contract of these endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRequest {
    pub no_faktur: Option<String>,
    pub tanggal_faktur: Option<String>,
    pub nama_customer: Option<String>,
    pub grand_total: Option<f64>,
}

impl From<SaleRequest> for NewSale {
    fn from(req: SaleRequest) -> Self {
        NewSale {
            no_faktur: req.no_faktur,
            tanggal_faktur: req.tanggal_faktur,
            nama_customer: req.nama_customer,
            grand_total: req.grand_total,
        }
    }
}

/// GET /api/sales - all sales, unfiltered.
pub async fn list_sales(State(db): State<Database>) -> Result<Json<Vec<Sale>>, ApiError> {
    let sales = db.sales().list().await.map_err(ApiError::internal)?;

    Ok(Json(sales))
}

/// POST /api/sales - create a sale header.
///
/// `grand_total` is caller-supplied: no items exist yet at this point.
pub async fn create_sale(
    State(db): State<Database>,
    Json(req): Json<SaleRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let id = db
        .sales()
        .insert(&NewSale::from(req))
        .await
        .map_err(ApiError::internal)?;

    info!(id, "Sale created");
    Ok((StatusCode::CREATED, "Data penjualan berhasil ditambahkan"))
}

/// PUT /api/sales/{id} - overwrite all four fields of a sale.
///
/// The caller-supplied `grand_total` is stored as-is, so it can diverge from
/// the true item sum. Updating a missing id succeeds silently.
pub async fn update_sale(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<SaleRequest>,
) -> Result<&'static str, ApiError> {
    db.sales()
        .update(id, &NewSale::from(req))
        .await
        .map_err(ApiError::internal)?;

    info!(id, "Sale updated");
    Ok("Data penjualan berhasil diperbarui")
}

/// DELETE /api/sales/{id} - delete a sale and all its items.
///
/// Two sequential statements with no transaction: items first (no
/// database-level cascade), then the header. A crash between the two leaves
/// an orphaned empty header behind.
pub async fn delete_sale(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    db.sale_items()
        .delete_for_sale(id)
        .await
        .map_err(ApiError::internal)?;

    db.sales().delete(id).await.map_err(ApiError::internal)?;

    info!(id, "Sale and items deleted");
    Ok("Penjualan beserta itemnya berhasil dihapus")
}
