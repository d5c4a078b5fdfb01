//! Client for the GymHealth progress API.
//!
//! Wraps the three progress endpoints behind the [`ProgressApi`] trait so
//! screens can be driven by the HTTP client or by a test double.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod client;

pub use config::ApiConfig;
pub use error::{ApiError, ApiErrorKind, Result};
pub use client::{ProgressApi, HttpProgressApi};
