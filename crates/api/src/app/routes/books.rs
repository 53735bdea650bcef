use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use bookshop_core::Isbn;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/isbn/:isbn", get(book_by_isbn))
        .route("/author/:author", get(books_by_author))
        .route("/title/:title", get(books_by_title))
        .route("/review/:isbn", get(book_reviews))
}

pub async fn list_books(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    services.simulate_lookup().await;
    match services.catalog.list() {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => errors::domain_error_to_response(&e, "No books found."),
    }
}

pub async fn book_by_isbn(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> axum::response::Response {
    services.simulate_lookup().await;
    let isbn = Isbn::from(isbn);
    match services.catalog.get(&isbn) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => {
            errors::domain_error_to_response(&e, format!("Book with ISBN {isbn} not found."))
        }
    }
}

pub async fn books_by_author(
    Extension(services): Extension<Arc<AppServices>>,
    Path(author): Path<String>,
) -> axum::response::Response {
    services.simulate_lookup().await;
    match services.catalog.by_author(&author) {
        Ok(books) => (
            StatusCode::OK,
            Json(serde_json::json!({ "booksbyauthor": dto::tagged_books_to_json(books) })),
        )
            .into_response(),
        Err(e) => {
            errors::domain_error_to_response(&e, format!("No books found by author: {author}"))
        }
    }
}

pub async fn books_by_title(
    Extension(services): Extension<Arc<AppServices>>,
    Path(title): Path<String>,
) -> axum::response::Response {
    services.simulate_lookup().await;
    match services.catalog.by_title(&title) {
        Ok(books) => (
            StatusCode::OK,
            Json(serde_json::json!({ "booksbytitle": dto::tagged_books_to_json(books) })),
        )
            .into_response(),
        Err(e) => {
            errors::domain_error_to_response(&e, format!("No books found with title: {title}"))
        }
    }
}

/// Synchronous in the original — no simulated delay here.
pub async fn book_reviews(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> axum::response::Response {
    let isbn = Isbn::from(isbn);
    match services.catalog.reviews(&isbn) {
        Ok(reviews) => (StatusCode::OK, Json(reviews)).into_response(),
        Err(e) => {
            errors::domain_error_to_response(&e, format!("Book with ISBN {isbn} not found."))
        }
    }
}
