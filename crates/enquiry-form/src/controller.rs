//! The submission form controller.
//!
//! Holds the draft [`ContactMessage`] and its [`SubmissionStatus`] and moves
//! between them. The rendering layer calls [`SubmissionController::update_field`]
//! on input and [`SubmissionController::submit`] on submit, then reads
//! [`SubmissionController::status`] to render feedback.

use enquiry_core::{
  ContactMessage, Field, PhonePolicy, SubmissionStatus,
  validate::validate_draft,
};
use tracing::{debug, info, warn};

use crate::transport::Transport;

/// Shown when the server rejects the message without saying why.
pub const SEND_FAILED: &str = "Failed to send message.";

/// Shown when no usable response came back.
pub const SEND_FAILED_RETRY: &str =
  "Failed to send message. Please try again later.";

/// Per-deployment settings.
#[derive(Debug, Clone)]
pub struct FormConfig {
  /// Full URL of the intake endpoint.
  pub endpoint:     String,
  pub phone_policy: PhonePolicy,
}

pub struct SubmissionController<T> {
  transport: T,
  config:    FormConfig,
  draft:     ContactMessage,
  status:    SubmissionStatus,
}

impl<T: Transport> SubmissionController<T> {
  /// A controller with an empty draft and `Idle` status.
  pub fn new(transport: T, config: FormConfig) -> Self {
    Self {
      transport,
      config,
      draft: ContactMessage::default(),
      status: SubmissionStatus::Idle,
    }
  }

  pub fn draft(&self) -> &ContactMessage { &self.draft }

  pub fn status(&self) -> &SubmissionStatus { &self.status }

  pub fn config(&self) -> &FormConfig { &self.config }

  pub fn transport(&self) -> &T { &self.transport }

  /// Set one field of the draft. No validation happens here.
  pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
    self.draft.set(field, value);
  }

  /// Validate the draft and, if it passes, send it once.
  ///
  /// Every failure leaves the draft in place for correction. Success clears
  /// it. Nothing is cached: calling again repeats the checks and the request.
  pub async fn submit(&mut self) -> &SubmissionStatus {
    self.status = SubmissionStatus::Validating;

    if let Err(e) = validate_draft(&self.draft, self.config.phone_policy) {
      debug!(error = %e, "contact draft rejected locally");
      self.status = SubmissionStatus::Failed(e.to_string());
      return &self.status;
    }

    self.status = SubmissionStatus::Sending;

    let body = match serde_json::to_value(&self.draft) {
      Ok(body) => body,
      Err(e) => {
        warn!(error = %e, "failed to encode contact draft");
        self.status = SubmissionStatus::Failed(SEND_FAILED_RETRY.to_string());
        return &self.status;
      }
    };

    let outcome = self.transport.post_json(&self.config.endpoint, &body).await;
    self.status = match outcome {
      Ok(res) if res.is_success() => {
        info!(status = res.status, "contact message sent");
        self.draft.clear();
        SubmissionStatus::Succeeded
      }
      Ok(res) => {
        warn!(status = res.status, "contact message refused");
        SubmissionStatus::Failed(res.message().unwrap_or(SEND_FAILED).to_string())
      }
      Err(e) => {
        warn!(error = %e, "contact message not delivered");
        SubmissionStatus::Failed(SEND_FAILED_RETRY.to_string())
      }
    };

    &self.status
  }
}
