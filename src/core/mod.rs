//! Core components of the `holdings-compare` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The HTTP [`HoldingsClient`] and its builder.
//! - The primary [`HoldingsError`] type and its [`ParseError`] details.
//! - Internal networking helpers.

/// The HTTP client (`HoldingsClient`), builder, and default sources.
pub mod client;
/// The primary error type (`HoldingsError`) for the crate.
pub mod error;

#[cfg(feature = "dataframe")]
/// Polars conversion trait, enabled with the `dataframe` feature.
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::constants::{DEFAULT_EFIV_URL, DEFAULT_SPY_URL};
pub use client::{HoldingsClient, HoldingsClientBuilder};
pub use error::{ErrorKind, HoldingsError, ParseError};
