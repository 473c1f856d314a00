//! # tscat Common
//!
//! Shared types, utilities, and common functionality for tscat.
//!
//! This crate provides the foundational error type and text helpers used
//! across all other crates in the workspace, plus `.ts` fixtures for tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
