//! Client side of the contact workflow.
//!
//! [`SubmissionController`] owns the draft message and its status and talks
//! to the intake endpoint through a [`Transport`]. [`HttpTransport`] is the
//! reqwest-backed implementation used outside tests.

// Native `async fn` in traits; the futures are only awaited in place.
#![allow(async_fn_in_trait)]

pub mod client;
pub mod controller;
pub mod transport;

pub use client::HttpTransport;
pub use controller::{FormConfig, SubmissionController};
pub use transport::{Transport, TransportError, TransportResponse};
