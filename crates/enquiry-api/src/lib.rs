//! JSON intake endpoint for the contact form.
//!
//! Exposes an axum [`Router`] with a single `/contact` route. It validates the
//! required fields and acknowledges the message; nothing is stored or
//! delivered. TLS, tracing layers and response headers belong to the caller.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", enquiry_api::intake_router())
//! ```

pub mod error;
pub mod intake;

use axum::{Router, routing::any};

pub use error::ApiError;
pub use intake::{IntakeRequest, IntakeResponse};

/// Build the intake router.
///
/// Every method is routed to the handler so that non-`POST` requests get the
/// JSON 405 body rather than axum's empty default.
pub fn intake_router() -> Router<()> {
  Router::new().route("/contact", any(intake::handler))
}
