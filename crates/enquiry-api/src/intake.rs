//! Handler for the `/contact` route.
//!
//! | Method | Path       | Notes |
//! |--------|------------|-------|
//! | `POST` | `/contact` | Body: `{"fullname","email","phone","message"}` |
//! | other  | `/contact` | 405, `Allow: POST` |

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::Method,
};
use enquiry_core::ContactMessage;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;

pub const MESSAGE_RECEIVED: &str = "Message received successfully";
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Request body as sent by the form. Every field may be missing; presence is
/// checked when converting into a [`ContactMessage`].
#[derive(Debug, Default, Deserialize)]
pub struct IntakeRequest {
  #[serde(alias = "fullName")]
  pub fullname: Option<String>,
  pub email:    Option<String>,
  pub phone:    Option<String>,
  pub message:  Option<String>,
}

impl TryFrom<IntakeRequest> for ContactMessage {
  type Error = ApiError;

  fn try_from(req: IntakeRequest) -> Result<Self, Self::Error> {
    fn required(value: Option<String>) -> Result<String, ApiError> {
      value.filter(|v| !v.is_empty()).ok_or(ApiError::MissingFields)
    }

    Ok(ContactMessage {
      full_name: required(req.fullname)?,
      email:     required(req.email)?,
      phone:     req.phone.unwrap_or_default(),
      message:   required(req.message)?,
    })
  }
}

/// Body of every response from this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeResponse {
  pub message: String,
}

impl IntakeResponse {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }
}

/// `POST /contact`
///
/// Acknowledges a complete message. No delivery or storage happens here.
pub async fn handler(
  method: Method,
  body: Result<Json<IntakeRequest>, JsonRejection>,
) -> Result<Json<IntakeResponse>, ApiError> {
  if method != Method::POST {
    warn!(%method, "contact intake: method not allowed");
    return Err(ApiError::MethodNotAllowed(method));
  }

  let Json(body) = body.map_err(|e| {
    warn!(error = %e, "contact intake: undecodable body");
    ApiError::InvalidBody(e.body_text())
  })?;

  let message = ContactMessage::try_from(body).inspect_err(|_| {
    warn!("contact intake: missing required fields");
  })?;

  info!(
    name = %message.full_name,
    email = %message.email,
    "contact message received"
  );

  Ok(Json(IntakeResponse::new(MESSAGE_RECEIVED)))
}
