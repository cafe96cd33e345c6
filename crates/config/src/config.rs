//! Immutable run configuration

use ssmenv_core::{DEFAULT_AWS_REGION, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;

/// Settings for a single ssmenv run.
///
/// Built by [`ConfigLoader`](crate::ConfigLoader) from CLI flags, environment
/// variables and defaults, in that order of precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Template to read
    pub input_file: PathBuf,

    /// Resolved environment file to write
    pub output_file: PathBuf,

    /// Parameter Store connection settings
    pub aws: AwsSettings,

    /// Whether to prefix the output with a provenance header
    pub header: HeaderMode,
}

/// Connection settings for the AWS Systems Manager client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub region: String,

    /// Endpoint override, e.g. a LocalStack URL. Always carries a scheme.
    pub endpoint_url: Option<String>,
}

/// Provenance header written before the resolved variables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// `# Created at <timestamp>` followed by `# ---`
    #[default]
    Timestamped,
    /// Variables only
    Disabled,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            aws: AwsSettings::default(),
            header: HeaderMode::default(),
        }
    }
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_AWS_REGION.to_string(),
            endpoint_url: None,
        }
    }
}
