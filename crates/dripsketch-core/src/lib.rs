//! # Dripsketch Core
//!
//! Shared foundations for the dripsketch layout designer:
//! design constants (viewport sizes, fit padding, creation defaults)
//! and the error types used at the serialization/catalog boundary.

pub mod constants;
pub mod error;

pub use error::{Error, Result};
