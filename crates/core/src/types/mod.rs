//! Core domain types for the `ssmenv` application.
//!
//! ## Organization
//!
//! - **`directive`**: One classified line of an environment template
//! - **`parameters`**: Values fetched from Parameter Store, keyed by path

pub mod directive;
pub mod parameters;

pub use directive::*;
pub use parameters::*;
