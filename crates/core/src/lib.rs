//! Core domain types, errors, and constants for the `ssmenv` application.
//!
//! This crate holds the building blocks shared by every other crate in the
//! workspace. It performs no I/O of its own.
//!
//! ## Key Components
//!
//! - **`errors`**: The primary `Error` enum and `Result` alias used by all
//!   fallible operations, from file access to Parameter Store calls.
//! - **`types`**: The `Directive` enum describing one classified line of an
//!   environment template, and `ResolvedParameters`, the path-to-value
//!   mapping returned by a parameter fetch.
//! - **`constants`**: The `ssm:` reference prefix, default file names,
//!   default AWS region and the environment variables read at startup.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
