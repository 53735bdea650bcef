//! `bookshop-catalog` — book records and the in-memory catalog store.
//!
//! The set of ISBNs is fixed at seed time; the only mutable state is each
//! book's review map, scoped to the acting user's own entry.

pub mod book;
pub mod seed;
pub mod store;

pub use book::{Book, ReviewError, ReviewOutcome};
pub use seed::seed_catalog;
pub use store::CatalogStore;
