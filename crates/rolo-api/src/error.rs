//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Email uniqueness violation.
  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Lift a storage backend error into the HTTP taxonomy via the domain
  /// taxonomy it converts to.
  pub fn from_store<E>(e: E) -> Self
  where
    E: Into<rolo_core::Error>,
  {
    ApiError::from(e.into())
  }
}

impl From<rolo_core::Error> for ApiError {
  fn from(e: rolo_core::Error) -> Self {
    match e {
      rolo_core::Error::Validation(msg) => ApiError::BadRequest(msg),
      rolo_core::Error::NotFound(id) => {
        ApiError::NotFound(format!("contact {id} not found"))
      }
      rolo_core::Error::EmailConflict(email) => {
        ApiError::Conflict(format!("email already in use: {email}"))
      }
      rolo_core::Error::Storage(inner) => ApiError::Store(inner),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
