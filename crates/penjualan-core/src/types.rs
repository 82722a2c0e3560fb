//! # Domain Types
//!
//! Core domain types for the penjualan API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────────┐        ┌────────────────────────┐           │
//! │  │        Sale        │ 1    n │        SaleItem        │           │
//! │  │  ────────────────  │◄───────│  ────────────────────  │           │
//! │  │  id_penjualan      │        │  id_detail_penjualan   │           │
//! │  │  no_faktur         │        │  id_penjualan (FK)     │           │
//! │  │  tanggal_faktur    │        │  nama_barang           │           │
//! │  │  nama_customer     │        │  qty_barang            │           │
//! │  │  grand_total ★     │        │  price                 │           │
//! │  └────────────────────┘        │  total_price ★         │           │
//! │                                └────────────────────────┘           │
//! │                                                                     │
//! │  ★ derived: total_price = qty × price at write time,                │
//! │    grand_total = sum of the items' total_price after item writes    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names match the upstream schema (`penjualan` = sale,
//! `detail_penjualan` = line item) so rows serialize straight to the wire.
//!
//! Text fields are `Option<String>`: the API performs no presence checks and
//! passes absent fields through to storage as NULL.

use serde::{Deserialize, Serialize};

// =============================================================================
// Sale (header)
// =============================================================================

/// A sales transaction header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    /// Surrogate identifier, generated by storage. Immutable once created.
    pub id_penjualan: i64,

    /// Invoice number.
    pub no_faktur: Option<String>,

    /// Invoice date, stored as supplied (no date parsing on this path).
    pub tanggal_faktur: Option<String>,

    /// Customer name.
    pub nama_customer: Option<String>,

    /// Header total. Derived from the items' `total_price`, but header
    /// create/update accept a caller-supplied value (no items exist yet on
    /// create; on update it can diverge from the true item sum).
    pub grand_total: Option<f64>,
}

/// Insert/update payload for a sale header.
///
/// Carries everything except the storage-generated id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub no_faktur: Option<String>,
    pub tanggal_faktur: Option<String>,
    pub nama_customer: Option<String>,
    pub grand_total: Option<f64>,
}

// =============================================================================
// SaleItem (line item)
// =============================================================================

/// One line item belonging to a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleItem {
    /// Surrogate identifier, generated by storage.
    pub id_detail_penjualan: i64,

    /// Owning sale.
    pub id_penjualan: i64,

    /// Item name.
    pub nama_barang: Option<String>,

    /// Quantity. Parsed from the request with [`crate::amount::parse_amount`].
    pub qty_barang: f64,

    /// Unit price.
    pub price: f64,

    /// Line amount, qty × price. Computed at write time and stored,
    /// not recomputed on read.
    pub total_price: f64,
}

/// Insert/update payload for a line item.
///
/// `total_price` is already computed here: by the time this struct exists the
/// amounts have passed numeric validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSaleItem {
    pub nama_barang: Option<String>,
    pub qty_barang: f64,
    pub price: f64,
    pub total_price: f64,
}

impl NewSaleItem {
    /// Builds an item payload from validated amounts, computing the line total.
    pub fn new(nama_barang: Option<String>, qty_barang: f64, price: f64) -> Self {
        NewSaleItem {
            nama_barang,
            qty_barang,
            price,
            total_price: crate::amount::line_total(qty_barang, price),
        }
    }
}
