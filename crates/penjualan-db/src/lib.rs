//! # penjualan-db: Database Layer for the Penjualan API
//!
//! This crate provides database access for the penjualan HTTP API.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Penjualan API Data Flow                        │
//! │                                                                     │
//! │  HTTP handler (add_item, list_sales, ...)                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  penjualan-db (THIS CRATE)                    │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐  │  │
//! │  │   │   Database    │   │  Repositories  │   │  Migrations  │  │  │
//! │  │   │   (pool.rs)   │   │  (sale.rs,     │   │  (embedded)  │  │  │
//! │  │   │               │   │   item.rs)     │   │              │  │  │
//! │  │   │ SqlitePool    │◄──│ SaleRepository │   │ 001_init.sql │  │  │
//! │  │   │ Management    │   │ SaleItemRepo   │   │              │  │  │
//! │  │   └───────────────┘   └────────────────┘   └──────────────┘  │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (sale header, line item)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use penjualan_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/penjualan.db")).await?;
//! let sales = db.sales().list().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::item::SaleItemRepository;
pub use repository::sale::SaleRepository;
