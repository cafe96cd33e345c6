//! `ssmenv` resolves `ssm:` references in an environment template against
//! AWS Systems Manager Parameter Store and writes the result as a plain
//! environment file.
//!
//! The text pipeline lives in `ssmenv-env`; this crate adds the Parameter
//! Store client and the orchestration around file I/O.

pub mod execute;
pub mod parameters;

pub use execute::{run, RunSummary};
pub use parameters::{ParameterFetcher, ParameterStore, SsmParameterStore, StaticParameterStore};
