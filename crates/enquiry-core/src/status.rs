//! Submission status shown by the form.

/// Where the form is in its submit cycle.
///
/// `Idle` → `Validating` → (`Failed` | `Sending` → (`Succeeded` | `Failed`)).
/// Every state accepts further edits; only `Succeeded` clears the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
  #[default]
  Idle,
  Validating,
  Sending,
  Succeeded,
  Failed(String),
}

impl SubmissionStatus {
  /// Feedback text for the rendering layer. Empty when there is nothing to
  /// say.
  pub fn feedback(&self) -> &str {
    match self {
      Self::Idle | Self::Validating => "",
      Self::Sending => "Sending...",
      Self::Succeeded => "Message sent successfully!",
      Self::Failed(reason) => reason.as_str(),
    }
  }

  /// True while a submit is in flight; the submit control should be
  /// disabled.
  pub fn is_busy(&self) -> bool {
    matches!(self, Self::Validating | Self::Sending)
  }

  pub fn is_failed(&self) -> bool { matches!(self, Self::Failed(_)) }
}

impl std::fmt::Display for SubmissionStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.feedback())
  }
}
