//! # Error Types
//!
//! Domain-specific error types for penjualan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  penjualan-core errors (this file)                                  │
//! │  └── ValidationError  - Input validation failures (HTTP 400)        │
//! │                                                                     │
//! │  penjualan-db errors (separate crate)                               │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  API errors (in app)                                                │
//! │  └── ApiError         - What HTTP clients see (status + message)    │
//! │                                                                     │
//! │  Flow: ValidationError / DbError → ApiError → HTTP response         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any statement is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quantity or unit price is not a parseable number.
    ///
    /// The message text is part of the API surface: item endpoints return
    /// it verbatim in the 400 response body.
    #[error("Invalid quantity or price. Check if the values are numeric.")]
    InvalidAmount,
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
