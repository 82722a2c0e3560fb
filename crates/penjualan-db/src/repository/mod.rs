//! # Repository Layer
//!
//! Repositories own the SQL for one table each. Multi-statement sequences
//! (cascade delete, grand-total recomputation) are composed by the HTTP
//! handlers, not here: each method issues exactly one statement and each
//! statement commits independently.

pub mod item;
pub mod sale;
