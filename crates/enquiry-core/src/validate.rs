//! Client-side rules deciding whether a draft may be sent.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{ContactMessage, Result, ValidationError};

/// `local@domain.tld`, no whitespace and a single `@`.
pub static EMAIL_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub static PHONE_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new("^[0-9]{10}$").unwrap());

/// How strictly the phone field is checked. Chosen per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
  /// Free text, may be empty.
  #[default]
  Optional,
  /// Required, exactly ten decimal digits.
  TenDigits,
}

impl From<bool> for PhonePolicy {
  fn from(required: bool) -> Self {
    if required { Self::TenDigits } else { Self::Optional }
  }
}

pub fn is_valid_email(email: &str) -> bool { EMAIL_REGEX.is_match(email) }

pub fn is_valid_phone(phone: &str) -> bool { PHONE_REGEX.is_match(phone) }

/// Run the checks in form order: required fields, email, then phone.
///
/// Required fields are judged after trimming; the email and phone patterns
/// see the raw values.
pub fn validate_draft(draft: &ContactMessage, phone: PhonePolicy) -> Result<()> {
  if draft.full_name.trim().is_empty()
    || draft.email.trim().is_empty()
    || draft.message.trim().is_empty()
  {
    return Err(ValidationError::MissingRequired);
  }

  if !is_valid_email(&draft.email) {
    return Err(ValidationError::InvalidEmail);
  }

  if phone == PhonePolicy::TenDigits && !is_valid_phone(&draft.phone) {
    return Err(ValidationError::InvalidPhone);
  }

  Ok(())
}
