//! Run-level coordination of parameter fetches

use super::store::ParameterStore;
use ssmenv_core::{ResolvedParameters, Result};

/// Fetches every referenced parameter in one batch per run.
pub struct ParameterFetcher {
    store: Box<dyn ParameterStore>,
}

impl ParameterFetcher {
    /// Create a fetcher backed by the given store
    pub fn new(store: Box<dyn ParameterStore>) -> Self {
        Self { store }
    }

    /// Resolve `paths` against the store.
    ///
    /// An empty `paths` never reaches the store: Parameter Store rejects
    /// `GetParameters` without names, and there is nothing to resolve anyway.
    /// A store failure is returned as is; there is no partial result.
    pub async fn fetch(&self, paths: &[String]) -> Result<ResolvedParameters> {
        if paths.is_empty() {
            tracing::debug!("No ssm: references found, skipping Parameter Store request");
            return Ok(ResolvedParameters::new());
        }

        tracing::debug!(paths = ?paths, "Requesting parameters");

        let resolved = self.store.get_parameters(paths).await?;

        let missing = paths
            .iter()
            .filter(|path| resolved.get(path).is_none())
            .count();
        tracing::info!(
            requested = paths.len(),
            resolved = paths.len() - missing,
            missing,
            "Fetched parameters from Parameter Store"
        );

        Ok(resolved)
    }
}
