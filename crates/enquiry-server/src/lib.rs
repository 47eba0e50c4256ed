//! HTTP server for the Enquiry contact endpoint.
//!
//! Wraps [`enquiry_api::intake_router`] with request tracing and the site's
//! response-header policy.

use axum::{
  Router,
  http::{HeaderValue, StatusCode, header, header::InvalidHeaderValue},
};
use serde::Deserialize;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Policy sent with every response unless overridden in configuration.
pub const DEFAULT_CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
  script-src 'self' 'unsafe-eval' 'unsafe-inline' https://apis.google.com; \
  style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; \
  font-src 'self' data:;";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ENQUIRY_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                    String,
  #[serde(default = "default_port")]
  pub port:                    u16,
  #[serde(default = "default_csp")]
  pub content_security_policy: String,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 3000 }

fn default_csp() -> String { DEFAULT_CONTENT_SECURITY_POLICY.to_string() }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                    default_host(),
      port:                    default_port(),
      content_security_policy: default_csp(),
    }
  }
}

impl ServerConfig {
  pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: `/api/contact` plus tracing and the
/// `Content-Security-Policy` header on every response.
///
/// Fails only if the configured policy is not a valid header value.
pub fn app(config: &ServerConfig) -> Result<Router, InvalidHeaderValue> {
  let csp = HeaderValue::from_str(&config.content_security_policy)?;

  Ok(
    Router::new()
      .nest("/api", enquiry_api::intake_router())
      .fallback(|| async { StatusCode::NOT_FOUND })
      .layer(SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        csp,
      ))
      .layer(TraceLayer::new_for_http()),
  )
}
