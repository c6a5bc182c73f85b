//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{OrderError, ProductError, UserError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Order lifecycle error.
    Order(OrderError),
    /// User service error.
    User(UserError),
    /// Product service error.
    Product(ProductError),
    /// Request body was missing, not JSON, or the wrong shape.
    InvalidBody(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Order(err) => order_error_to_response(err),
            ApiError::User(err) => user_error_to_response(err),
            ApiError::Product(err) => product_error_to_response(err),
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "internal server error");
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn order_error_to_response(err: OrderError) -> (StatusCode, String) {
    match &err {
        OrderError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        OrderError::InvalidStateTransition { .. } => (StatusCode::CONFLICT, err.to_string()),
        OrderError::AmountOverflow => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        OrderError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn user_error_to_response(err: UserError) -> (StatusCode, String) {
    match &err {
        UserError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        UserError::InvalidEmail(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        UserError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn product_error_to_response(err: ProductError) -> (StatusCode, String) {
    match &err {
        ProductError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ProductError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::Order(err)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        ApiError::User(err)
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        ApiError::Product(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

#[cfg(test)]
mod tests {
    use common::RecordId;
    use domain::OrderStatus;
    use record_store::RecordStoreError;

    use super::*;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn order_errors_map_to_statuses() {
        assert_eq!(
            status_of(OrderError::NotFound(RecordId::new("x"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(OrderError::InvalidStateTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Pending,
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(OrderError::AmountOverflow),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(OrderError::Store(RecordStoreError::AlreadyExists(
                RecordId::new("x")
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn user_and_product_errors_map_to_statuses() {
        assert_eq!(
            status_of(UserError::InvalidEmail("nope".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(UserError::NotFound(RecordId::new("x"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ProductError::NotFound(RecordId::new("x"))),
            StatusCode::NOT_FOUND
        );
    }
}
