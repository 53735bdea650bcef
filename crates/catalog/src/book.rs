//! Book record and review mutation outcomes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookshop_core::Username;

/// A book in the catalog.
///
/// # Invariants
/// - `reviews` holds at most one entry per username.
/// - Only the acting authenticated user's own entry may be mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub reviews: HashMap<Username, String>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            reviews: HashMap::new(),
        }
    }
}

/// Whether a review upsert created a new entry or replaced an existing one.
///
/// The two cases produce different response messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Added,
    Modified,
}

/// Review mutation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("book not found")]
    UnknownBook,

    #[error("review content is required")]
    EmptyText,

    #[error("no review by this user")]
    NoReview,
}
