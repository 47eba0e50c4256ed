//! The contact message and the names of its editable fields.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A message submitted through the contact form.
///
/// Never persisted. The form holds one as a draft, edits it field by field,
/// and resets it after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
  #[serde(rename = "fullname", alias = "fullName")]
  pub full_name: String,
  pub email:     String,
  #[serde(default)]
  pub phone:     String,
  pub message:   String,
}

impl ContactMessage {
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::FullName => &self.full_name,
      Field::Email => &self.email,
      Field::Phone => &self.phone,
      Field::Message => &self.message,
    }
  }

  pub fn set(&mut self, field: Field, value: impl Into<String>) {
    let slot = match field {
      Field::FullName => &mut self.full_name,
      Field::Email => &mut self.email,
      Field::Phone => &mut self.phone,
      Field::Message => &mut self.message,
    };
    *slot = value.into();
  }

  /// Reset every field to the empty string.
  pub fn clear(&mut self) { *self = Self::default(); }

  pub fn is_empty(&self) -> bool { *self == Self::default() }
}

/// An editable field of a [`ContactMessage`], named as the form inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
  #[strum(to_string = "fullname", serialize = "fullName", serialize = "full_name")]
  FullName,
  Email,
  Phone,
  Message,
}

impl Field {
  pub const ALL: [Field; 4] =
    [Field::FullName, Field::Email, Field::Phone, Field::Message];
}
