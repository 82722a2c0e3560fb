//! # penjualan-core: Pure Business Logic for the Penjualan API
//!
//! This crate contains the domain types and the one piece of real business
//! logic in the system: line-total and grand-total arithmetic, plus the
//! lenient numeric parsing applied to request fields.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Penjualan API Architecture                      │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    HTTP Handlers (axum)                       │  │
//! │  │    list_sales, create_sale, add_item, update_item, ...        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ penjualan-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐    ┌───────────┐    ┌───────────┐             │  │
//! │  │   │   types   │    │  amount   │    │   error   │             │  │
//! │  │   │   Sale    │    │ RawNumber │    │Validation │             │  │
//! │  │   │ SaleItem  │    │  totals   │    │  Error    │             │  │
//! │  │   └───────────┘    └───────────┘    └───────────┘             │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                penjualan-db (Database Layer)                  │  │
//! │  │             SQLite queries, migrations, repositories          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Sale, SaleItem and their insert payloads)
//! - [`amount`] - Request-field numeric parsing and total arithmetic
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::{grand_total, line_total, parse_amount, RawNumber};
pub use error::ValidationError;
pub use types::{NewSale, NewSaleItem, Sale, SaleItem};
