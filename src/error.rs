//! Error taxonomy shared across the service and HTTP layers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Difficulty outside [0, 1]. Rejected before any mutation.
  #[error("difficulty must be between 0.0 and 1.0, got {0}")]
  InvalidDifficulty(f64),

  /// A required text field was empty or missing.
  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("phrase not found: {0}")]
  PhraseNotFound(String),

  /// The backing store lock is poisoned. Nothing was written.
  #[error("store unavailable")]
  StoreUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::InvalidDifficulty(_) | Error::EmptyField(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Error::PhraseNotFound(_) => StatusCode::NOT_FOUND,
      Error::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
      tracing::error!("request failed: {}", self);
    }

    let body = ErrorBody {
      error: self.to_string(),
    };
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validation_errors_map_to_422() {
    let resp = Error::InvalidDifficulty(1.5).into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = Error::EmptyField("english").into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[test]
  fn test_not_found_maps_to_404() {
    let resp = Error::PhraseNotFound("abc".to_string()).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn test_store_error_maps_to_500() {
    let resp = Error::StoreUnavailable.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_error_messages() {
    assert_eq!(
      Error::InvalidDifficulty(1.5).to_string(),
      "difficulty must be between 0.0 and 1.0, got 1.5"
    );
    assert_eq!(Error::EmptyField("japanese").to_string(), "japanese must not be empty");
  }
}
