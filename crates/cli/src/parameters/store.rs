//! Parameter store implementations
//!
//! One call receives every path the template references and returns
//! whatever the store could resolve.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::error::DisplayErrorContext;
use ssmenv_config::AwsSettings;
use ssmenv_core::{Error, ResolvedParameters, Result, SSM_MAX_NAMES_PER_REQUEST};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Trait for fetching parameter values by path
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the values for `names`
    ///
    /// # Returns
    /// * `Ok(params)` - Every parameter the store returned; names it does not
    ///   know (deleted, never created, access denied) are simply absent
    /// * `Err(error)` - The request itself failed and nothing can be trusted
    async fn get_parameters(&self, names: &[String]) -> Result<ResolvedParameters>;
}

/// Split `names` into de-duplicated request batches no larger than a single
/// `GetParameters` call accepts. First occurrence decides the order.
pub fn request_batches(names: &[String]) -> Vec<Vec<String>> {
    let mut seen = HashSet::new();
    let unique: Vec<String> = names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect();

    unique
        .chunks(SSM_MAX_NAMES_PER_REQUEST)
        .map(<[String]>::to_vec)
        .collect()
}

/// AWS Systems Manager Parameter Store client
///
/// SecureString parameters are always decrypted.
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    /// Build a client from the default AWS credential chain for the
    /// configured region and optional endpoint override
    pub async fn new(settings: &AwsSettings) -> Self {
        let region = aws_sdk_ssm::config::Region::new(settings.region.clone());
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let Some(ref endpoint) = settings.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        info!(
            region = %settings.region,
            endpoint = settings.endpoint_url.as_deref().unwrap_or("default"),
            "SsmParameterStore initialised"
        );

        Self::from_client(aws_sdk_ssm::Client::new(&sdk_config))
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }

    async fn get_batch(&self, batch: Vec<String>) -> Result<ResolvedParameters> {
        let requested = batch.len();
        let response = self
            .client
            .get_parameters()
            .set_names(Some(batch))
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                Error::parameter_store_with_source(
                    "GetParameters",
                    DisplayErrorContext(&e).to_string(),
                    e,
                )
            })?;

        for invalid in response.invalid_parameters() {
            warn!(path = %invalid, "Parameter Store does not know this parameter");
        }

        let mut resolved = ResolvedParameters::new();
        for parameter in response.parameters() {
            if let (Some(name), Some(value)) = (parameter.name(), parameter.value()) {
                resolved.insert(name, value);
            }
        }

        debug!(
            requested,
            returned = resolved.len(),
            "GetParameters batch completed"
        );

        Ok(resolved)
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameters(&self, names: &[String]) -> Result<ResolvedParameters> {
        let mut resolved = ResolvedParameters::new();

        // One failing batch fails the whole fetch
        for batch in request_batches(names) {
            resolved.merge(self.get_batch(batch).await?);
        }

        Ok(resolved)
    }
}

/// In-memory store holding a fixed set of parameters
#[derive(Debug, Clone, Default)]
pub struct StaticParameterStore {
    parameters: ResolvedParameters,
}

impl StaticParameterStore {
    pub fn new(parameters: ResolvedParameters) -> Self {
        Self { parameters }
    }
}

#[async_trait]
impl ParameterStore for StaticParameterStore {
    async fn get_parameters(&self, names: &[String]) -> Result<ResolvedParameters> {
        Ok(names
            .iter()
            .filter_map(|name| {
                self.parameters
                    .get(name)
                    .map(|value| (name.clone(), value.to_string()))
            })
            .collect())
    }
}
