use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bookshop_core::DomainError;

/// Map a domain failure onto the HTTP taxonomy, with an endpoint-supplied
/// message. Validation → 400, not-found → 404, conflict → 409,
/// authorization → 403.
pub fn domain_error_to_response(
    err: &DomainError,
    message: impl Into<String>,
) -> axum::response::Response {
    let status = match err {
        DomainError::Validation(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized => StatusCode::FORBIDDEN,
    };
    json_error(status, message)
}

/// Every failure body is `{"message": ...}` — that shape is part of the
/// external contract.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_contract_statuses() {
        let cases = [
            (DomainError::validation("x"), StatusCode::BAD_REQUEST),
            (DomainError::invalid_id("x"), StatusCode::BAD_REQUEST),
            (DomainError::NotFound, StatusCode::NOT_FOUND),
            (DomainError::conflict("x"), StatusCode::CONFLICT),
            (DomainError::Unauthorized, StatusCode::FORBIDDEN),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_response(&err, "m").status(), status);
        }
    }
}
