//! Error types for `enquiry-core`.

use thiserror::Error;

/// Why a draft was rejected before reaching the network.
///
/// The `Display` text is what the form shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Please fill in all required fields.")]
  MissingRequired,

  #[error("Please enter a valid email address.")]
  InvalidEmail,

  #[error("Please enter a valid 10-digit phone number.")]
  InvalidPhone,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
