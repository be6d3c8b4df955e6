//! Core components of the `mnb-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MnbClient`] and its builder.
//! - The primary [`MnbError`] type.
//! - Configuration and date normalization.
//! - XML navigation helpers shared by the payload parsers.

/// The main client (`MnbClient`), builder, and defaults.
pub mod client;
/// Environment-driven configuration (`MnbConfig`).
pub mod config;
/// Reducing caller-supplied dates to calendar days.
pub mod dates;
/// The primary error type (`MnbError`) for the crate.
pub mod error;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::MnbClient`
pub use client::{MnbClient, MnbClientBuilder};
pub use config::MnbConfig;
pub use dates::ToRateDate;
pub use error::{BoxError, MnbError};
