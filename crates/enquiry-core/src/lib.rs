//! Core types for the Enquiry contact workflow.
//!
//! This crate has no HTTP dependencies. The intake endpoint and the form
//! controller both depend on it for the shape of a contact message and the
//! rules that decide whether one may be submitted.

pub mod error;
pub mod message;
pub mod status;
pub mod validate;

pub use error::{Result, ValidationError};
pub use message::{ContactMessage, Field};
pub use status::SubmissionStatus;
pub use validate::PhonePolicy;
