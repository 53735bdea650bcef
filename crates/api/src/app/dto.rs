use serde::Deserialize;

use bookshop_catalog::Book;
use bookshop_core::Isbn;

// -------------------------
// Request DTOs
// -------------------------

// Credential fields are Options so a missing field surfaces as the
// contract's 400, not a deserialization rejection.

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// PUT review body travels as a query parameter, per the original contract.
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub review: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// A search result: each matching book tagged with its ISBN.
pub fn tagged_books_to_json(books: Vec<(Isbn, Book)>) -> Vec<serde_json::Value> {
    books
        .into_iter()
        .map(|(isbn, book)| {
            serde_json::json!({
                "isbn": isbn,
                "title": book.title,
                "author": book.author,
                "reviews": book.reviews,
            })
        })
        .collect()
}
