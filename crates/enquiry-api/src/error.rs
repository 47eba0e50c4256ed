//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{HeaderValue, Method, StatusCode, header},
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::intake::{IntakeResponse, MISSING_FIELDS};

/// An error returned by the intake handler.
///
/// Every variant renders as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Missing required fields")]
  MissingFields,

  /// The body could not be decoded at all. Reported to the client exactly
  /// like [`ApiError::MissingFields`].
  #[error("undecodable request body: {0}")]
  InvalidBody(String),

  #[error("Method {0} Not Allowed")]
  MethodNotAllowed(Method),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::MissingFields | ApiError::InvalidBody(_) => (
        StatusCode::BAD_REQUEST,
        Json(IntakeResponse::new(MISSING_FIELDS)),
      )
        .into_response(),
      ApiError::MethodNotAllowed(_) => (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, HeaderValue::from_static("POST"))],
        Json(IntakeResponse::new(self.to_string())),
      )
        .into_response(),
    }
  }
}
