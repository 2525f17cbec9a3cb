use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Database not configured")]
    StoreUnavailable,
    #[display("Order not found")]
    OrderNotFound,
    #[display("Invalid order id")]
    InvalidOrderId,
    #[display("{}", _0)]
    Validation(String),
    #[display("internal")]
    Internal,
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::StoreUnavailable | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::InvalidOrderId => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database not configured")]
    Unavailable,
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => ApiError::StoreUnavailable,
            StoreError::Database(e) => {
                tracing::error!(err = %e, "document store call failed");
                ApiError::Internal
            }
        }
    }
}

/// Body deserialization failures surface as 422 rather than actix's
/// default 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = HttpResponse::UnprocessableEntity().json(ErrBody {
            error: err.to_string(),
        });
        actix_web::error::InternalError::from_response(err, body).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::StoreUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::OrderNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidOrderId.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_unavailable_maps_to_fixed_message() {
        let api: ApiError = StoreError::Unavailable.into();
        assert_eq!(api.to_string(), "Database not configured");
    }
}
