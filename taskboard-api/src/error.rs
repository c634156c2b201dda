/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which automatically converts
/// to the right status code, so no handler carries its own catch logic.
///
/// # Contract
///
/// Success bodies are JSON; error bodies are plain text carrying the error's
/// message. Validation and not-found failures both map to 400 (the service
/// deliberately does not use 404 for missing ids). Store failures map to 500
/// with the store error's message; any other internal failure maps to 500
/// with the fixed body `Erro inesperado`.
///
/// # Example
///
/// ```
/// use taskboard_api::error::{ApiError, ApiResult};
///
/// fn lookup(found: bool) -> ApiResult<&'static str> {
///     if found {
///         Ok("row")
///     } else {
///         Err(ApiError::NotFound("'id' não encontrada.".to_string()))
///     }
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input, detected before any store call is made (400)
    #[error("{0}")]
    Validation(String),

    /// A referenced id does not exist in the store (400)
    #[error("{0}")]
    NotFound(String),

    /// Store-level failure: connectivity, constraint violation (500)
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Any failure without a recognized shape (500, fixed body)
    #[error("Erro inesperado")]
    Unexpected(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unexpected(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) | ApiError::NotFound(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "store error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            ApiError::Unexpected(err) => {
                tracing::error!(error = %err, "unexpected error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro inesperado".to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_parts(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_400_with_plain_text_message() {
        let (status, body) =
            response_parts(ApiError::Validation("'id' deve ser uma string.".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "'id' deve ser uma string.");
    }

    #[tokio::test]
    async fn test_not_found_error_is_400_not_404() {
        let (status, body) =
            response_parts(ApiError::NotFound("'id' não encontrada.".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "'id' não encontrada.");
    }

    #[tokio::test]
    async fn test_database_error_is_500_with_message() {
        let (status, body) =
            response_parts(ApiError::Database(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_error_uses_fixed_body() {
        let (status, body) =
            response_parts(ApiError::Unexpected(anyhow::anyhow!("detail is hidden"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Erro inesperado");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Validation("'title' deve ser uma string.".to_string());
        assert_eq!(err.to_string(), "'title' deve ser uma string.");

        let err = ApiError::Unexpected(anyhow::anyhow!("whatever"));
        assert_eq!(err.to_string(), "Erro inesperado");
    }
}
