use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy.
///
/// `Validation`, `NotFound` and `Duplicate` are client errors carrying the
/// exact message the response body exposes. `Mongo` wraps any store failure
/// and surfaces as a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Duplicate(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Mongo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Mongo(e) => {
                error!("{:?}", e);
                HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
            }
            _ => HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(AppError::Validation("bad".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Duplicate("dup".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("missing".into()).status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn client_error_body_uses_message_key() {
        let resp = AppError::NotFound("No valid country found for country ID".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "No valid country found for country ID");
        assert!(body.get("error").is_none());
    }
}
