//! # tscat Config
//!
//! Type-safe configuration management for tscat.
//!
//! This crate provides configuration loading, environment overrides,
//! validation, and atomic persistence of the settings file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
