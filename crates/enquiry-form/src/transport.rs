//! The network seam the controller depends on.

use serde_json::Value;
use thiserror::Error;

/// A request/response exchange that could not be completed.
#[derive(Debug, Error)]
pub enum TransportError {
  /// No response was received: connection refused, timeout, DNS failure.
  #[error("request failed: {0}")]
  Request(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A response arrived but its body was not JSON.
  #[error("response body is not JSON: {0}")]
  Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Status code and decoded JSON body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
  pub status: u16,
  pub body:   Value,
}

impl TransportResponse {
  pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }

  /// The server's `message` string, if it sent a non-empty one.
  pub fn message(&self) -> Option<&str> {
    self
      .body
      .get("message")
      .and_then(Value::as_str)
      .filter(|m| !m.is_empty())
  }
}

/// Sends a JSON body with `POST` and hands back whatever the server said.
///
/// Timeouts are the implementation's business.
pub trait Transport {
  async fn post_json(
    &self,
    url: &str,
    body: &Value,
  ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn message_ignores_empty_and_non_string() {
    let res = |body| TransportResponse { status: 400, body };
    assert_eq!(res(json!({ "message": "nope" })).message(), Some("nope"));
    assert_eq!(res(json!({ "message": "" })).message(), None);
    assert_eq!(res(json!({ "message": 3 })).message(), None);
    assert_eq!(res(json!([])).message(), None);
  }

  #[test]
  fn success_is_2xx() {
    let res = |status| TransportResponse { status, body: Value::Null };
    assert!(res(200).is_success());
    assert!(res(204).is_success());
    assert!(!res(302).is_success());
    assert!(!res(400).is_success());
  }
}
