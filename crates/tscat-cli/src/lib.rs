//! # tscat CLI
//!
//! Command-line access to Papagayo-NG translation catalogs: look up
//! strings, report completion, verify lossless round trips and rewrite
//! catalogs in canonical `lupdate` layout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use cli::*;
pub use error::*;
