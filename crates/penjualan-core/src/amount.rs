//! # Amount Parsing and Totals
//!
//! The one piece of non-trivial logic in this system: lenient numeric
//! parsing of request fields, the line-total computation, and the grand-total
//! sum that the add-item path writes back to the header.
//!
//! ## Parsing Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Amount Parsing                                  │
//! │                                                                     │
//! │  Request body field (qty_barang / price)                            │
//! │       │                                                             │
//! │       ├── JSON number   → used as-is                                │
//! │       ├── JSON string   → trimmed, then standard f64 parsing        │
//! │       │                   ("2", " 2.5 ", "1e2" all accepted)        │
//! │       └── null / absent / anything else → ValidationError (400)     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients submit these fields both as JSON numbers and as strings (form
//! encodings stringify everything), so the deserialized shape must accept
//! both. Parsing is locale-insensitive.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// RawNumber
// =============================================================================

/// A request field that should be numeric but may arrive as a string.
///
/// Deserializes untagged: a JSON number binds to `Number`, a JSON string to
/// `Text`, an explicit `null` to `Null`, and any other shape to `Other`.
/// Only [`parse_amount`] decides which of those are acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Null,
    Other(serde_json::Value),
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a quantity or unit-price field into an `f64`.
///
/// ## Accepted
/// - JSON numbers
/// - numeric strings, with surrounding whitespace and exponent notation
///   (`" 2.5 "`, `"1e3"`)
///
/// ## Rejected (all map to [`ValidationError::InvalidAmount`])
/// - absent fields and explicit `null`
/// - empty or non-numeric strings (`""`, `"abc"`)
/// - `"NaN"` in any casing: f64 parsing accepts it, but a not-a-number
///   amount would poison every stored total it touches
/// - prefix-numeric strings (`"2abc"`): lenient parsers take the leading
///   digits; here the whole string must be numeric
/// - non-scalar JSON shapes (arrays, objects, booleans)
///
/// ## Example
/// ```rust
/// use penjualan_core::amount::{parse_amount, RawNumber};
///
/// let qty = parse_amount(Some(&RawNumber::Text(" 2.5 ".to_string()))).unwrap();
/// assert_eq!(qty, 2.5);
/// assert!(parse_amount(None).is_err());
/// ```
pub fn parse_amount(raw: Option<&RawNumber>) -> ValidationResult<f64> {
    let value = match raw {
        Some(RawNumber::Number(n)) => *n,
        Some(RawNumber::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount)?,
        None | Some(RawNumber::Null) | Some(RawNumber::Other(_)) => {
            return Err(ValidationError::InvalidAmount)
        }
    };

    // f64 parsing accepts "NaN"/"nan"; an amount that is not a number must
    // still fail, or the stored total_price and the recomputed grand_total
    // both become NaN
    if value.is_nan() {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(value)
}

// =============================================================================
// Totals
// =============================================================================

/// Line amount for a single item: quantity × unit price.
#[inline]
pub fn line_total(qty: f64, price: f64) -> f64 {
    qty * price
}

/// Header total: sum of the line totals of every item on the sale.
///
/// ## When To Call
/// After re-reading all of a sale's items following an item insert. The
/// result is written back to `penjualan.grand_total`.
pub fn grand_total<I>(line_totals: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    line_totals.into_iter().sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
