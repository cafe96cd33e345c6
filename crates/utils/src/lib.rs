//! Shared utilities for ssmenv
//!
//! Logging setup and file helpers used by the CLI. Nothing here knows about
//! the template format.

pub mod atomic_file;
pub mod logging;

pub use atomic_file::*;
