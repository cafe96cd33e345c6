//! Parameter Store access
//!
//! [`ParameterStore`] is the seam between the pipeline and AWS: the
//! production implementation talks to Systems Manager, tests plug in
//! [`StaticParameterStore`] or their own doubles. [`ParameterFetcher`] wraps a
//! store with the run-level policy (skip empty requests, logging).

mod fetcher;
mod store;


pub use fetcher::ParameterFetcher;
pub use store::{request_batches, ParameterStore, SsmParameterStore, StaticParameterStore};
