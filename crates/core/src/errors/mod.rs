//! Error types for ssmenv operations

mod builders;
mod types;

pub use types::{Error, Result};
