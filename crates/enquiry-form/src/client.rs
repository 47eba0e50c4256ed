//! reqwest-backed [`Transport`].

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::transport::{Transport, TransportError, TransportResponse};

/// HTTP transport for the intake endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpTransport {
  client: Client,
}

impl HttpTransport {
  pub fn new() -> Result<Self> {
    Self::with_timeout(Duration::from_secs(30))
  }

  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client })
  }
}

impl Transport for HttpTransport {
  async fn post_json(
    &self,
    url: &str,
    body: &Value,
  ) -> Result<TransportResponse, TransportError> {
    let resp = self
      .client
      .post(url)
      .json(body)
      .send()
      .await
      .map_err(|e| TransportError::Request(Box::new(e)))?;

    let status = resp.status().as_u16();
    let body = resp
      .json::<Value>()
      .await
      .map_err(|e| TransportError::Decode(Box::new(e)))?;

    Ok(TransportResponse { status, body })
  }
}

/// Drives a real intake server over loopback.
#[cfg(test)]
mod integration {
  use enquiry_core::{Field, PhonePolicy, SubmissionStatus};
  use tokio::net::TcpListener;

  use super::*;
  use crate::controller::{FormConfig, SEND_FAILED_RETRY, SubmissionController};

  async fn spawn_intake() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = axum::Router::new().nest("/api", enquiry_api::intake_router());
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/contact")
  }

  fn fill(form: &mut SubmissionController<HttpTransport>) {
    form.update_field(Field::FullName, "Jane");
    form.update_field(Field::Email, "jane@x.com");
    form.update_field(Field::Phone, "1234567890");
    form.update_field(Field::Message, "hi");
  }

  #[tokio::test]
  async fn submits_to_live_endpoint() {
    let endpoint = spawn_intake().await;
    let mut form = SubmissionController::new(
      HttpTransport::new().unwrap(),
      FormConfig { endpoint, phone_policy: PhonePolicy::TenDigits },
    );
    fill(&mut form);

    assert_eq!(form.submit().await, &SubmissionStatus::Succeeded);
    assert!(form.draft().is_empty());
  }

  #[tokio::test]
  async fn live_endpoint_reason_is_relayed() {
    let endpoint = spawn_intake().await;
    let transport = HttpTransport::new().unwrap();
    let res = transport
      .post_json(&endpoint, &serde_json::json!({ "fullname": "", "email": "a@b.c", "message": "hi" }))
      .await
      .unwrap();
    assert_eq!(res.status, 400);
    assert_eq!(res.message(), Some("Missing required fields"));
  }

  #[tokio::test]
  async fn connection_refused_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut form = SubmissionController::new(
      HttpTransport::new().unwrap(),
      FormConfig {
        endpoint:     format!("http://{addr}/api/contact"),
        phone_policy: PhonePolicy::Optional,
      },
    );
    fill(&mut form);

    assert_eq!(
      form.submit().await,
      &SubmissionStatus::Failed(SEND_FAILED_RETRY.into())
    );
    assert_eq!(form.draft().full_name, "Jane");
  }
}
