//! Review mutation endpoints. Nested under `/customer/auth/review` and gated
//! by the session middleware, which guarantees `AuthedUser` is present.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::put,
};

use bookshop_catalog::{ReviewError, ReviewOutcome};
use bookshop_core::Isbn;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthedUser;

pub fn router() -> Router {
    Router::new().route("/:isbn", put(put_review).delete(delete_review))
}

pub async fn put_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<AuthedUser>,
    Path(isbn): Path<String>,
    Query(params): Query<dto::ReviewQuery>,
) -> axum::response::Response {
    let isbn = Isbn::from(isbn);
    let username = user.username();
    // A missing param and `?review=` are the same thing: no content.
    let review = params.review.unwrap_or_default();

    match services.catalog.upsert_review(&isbn, username, &review) {
        Ok(outcome) => {
            let verb = match outcome {
                ReviewOutcome::Added => "added",
                ReviewOutcome::Modified => "modified",
            };
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!(
                        "Review for ISBN {isbn} by user {username} successfully {verb}."
                    )
                })),
            )
                .into_response()
        }
        Err(ReviewError::UnknownBook) => {
            errors::json_error(StatusCode::NOT_FOUND, "Book not found.")
        }
        Err(ReviewError::EmptyText) => {
            errors::json_error(StatusCode::BAD_REQUEST, "Review content is required.")
        }
        Err(ReviewError::NoReview) => errors::json_error(
            StatusCode::NOT_FOUND,
            format!("No review found for ISBN {isbn} by user {username}."),
        ),
    }
}

pub async fn delete_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<AuthedUser>,
    Path(isbn): Path<String>,
) -> axum::response::Response {
    let isbn = Isbn::from(isbn);
    let username = user.username();

    match services.catalog.delete_review(&isbn, username) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": format!(
                    "Review for ISBN {isbn} by user {username} successfully deleted."
                )
            })),
        )
            .into_response(),
        Err(ReviewError::UnknownBook) => {
            errors::json_error(StatusCode::NOT_FOUND, "Book not found.")
        }
        Err(_) => errors::json_error(
            StatusCode::NOT_FOUND,
            format!("No review found for ISBN {isbn} by user {username}."),
        ),
    }
}
