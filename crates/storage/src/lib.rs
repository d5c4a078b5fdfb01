//! Persisted credential storage for GymHealth.
//!
//! This crate provides a trait-based credential store with a JSON file
//! implementation and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory;

pub use trait_::{CredentialStore, StorageError, Result};
pub use json_storage::JsonCredentialStore;
pub use memory::MemoryCredentialStore;
