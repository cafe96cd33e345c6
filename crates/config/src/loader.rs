//! Configuration loader for ssmenv
//!
//! Layers CLI overrides over environment variables over built-in defaults.
//! Empty strings count as unset at every layer.

use crate::config::{AwsSettings, Config, HeaderMode};
use ssmenv_core::{
    constants::{AWS_ENDPOINT_URL_SSM_VAR, AWS_REGION_VAR, INPUT_FILE_VAR, OUTPUT_FILE_VAR},
    Error, Result,
};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Configuration loader that handles all startup configuration
pub struct ConfigLoader {
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    region: Option<String>,
    endpoint_url: Option<String>,
    header: HeaderMode,
    /// Snapshot of the environment variables to fall back on
    environment: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a loader that falls back on the current process environment
    pub fn new() -> Self {
        Self::with_environment(std::env::vars().collect())
    }

    /// Create a loader that falls back on the given variables instead of the
    /// process environment
    pub fn with_environment(environment: HashMap<String, String>) -> Self {
        Self {
            input_file: None,
            output_file: None,
            region: None,
            endpoint_url: None,
            header: HeaderMode::default(),
            environment,
        }
    }

    /// Set the template path
    pub fn input_file(mut self, path: Option<PathBuf>) -> Self {
        self.input_file = path;
        self
    }

    /// Set the output path
    pub fn output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path;
        self
    }

    /// Set the AWS region
    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// Set the Parameter Store endpoint override
    pub fn endpoint_url(mut self, url: Option<String>) -> Self {
        self.endpoint_url = url;
        self
    }

    /// Set the header mode
    pub fn header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    /// Resolve the final configuration
    pub fn load(self) -> Result<Config> {
        let defaults = Config::default();

        let input_file = self
            .path_setting(self.input_file.as_ref(), INPUT_FILE_VAR)
            .unwrap_or(defaults.input_file);
        let output_file = self
            .path_setting(self.output_file.as_ref(), OUTPUT_FILE_VAR)
            .unwrap_or(defaults.output_file);

        if same_path(&input_file, &output_file) {
            return Err(Error::configuration(format!(
                "input and output both point to '{}'; refusing to overwrite the template",
                input_file.display()
            )));
        }

        let region = self
            .string_setting(self.region.as_deref(), AWS_REGION_VAR)
            .unwrap_or(defaults.aws.region);
        let endpoint_url = self
            .string_setting(self.endpoint_url.as_deref(), AWS_ENDPOINT_URL_SSM_VAR)
            .map(require_scheme)
            .transpose()?;

        let config = Config {
            input_file,
            output_file,
            aws: AwsSettings {
                region,
                endpoint_url,
            },
            header: self.header,
        };

        debug!(
            input = %config.input_file.display(),
            output = %config.output_file.display(),
            region = %config.aws.region,
            endpoint = config.aws.endpoint_url.as_deref().unwrap_or("default"),
            "Loaded configuration"
        );

        Ok(config)
    }

    fn string_setting(&self, flag: Option<&str>, var: &str) -> Option<String> {
        flag.filter(|value| !value.trim().is_empty())
            .map(str::to_owned)
            .or_else(|| {
                self.environment
                    .get(var)
                    .filter(|value| !value.trim().is_empty())
                    .cloned()
            })
    }

    fn path_setting(&self, flag: Option<&PathBuf>, var: &str) -> Option<PathBuf> {
        flag.filter(|path| !path.as_os_str().is_empty())
            .cloned()
            .or_else(|| self.string_setting(None, var).map(PathBuf::from))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexical comparison ignoring `.` components, so `./.env` and `.env` match
fn same_path(a: &Path, b: &Path) -> bool {
    fn normal(path: &Path) -> impl Iterator<Item = Component<'_>> {
        path.components()
            .filter(|component| !matches!(component, Component::CurDir))
    }
    normal(a).eq(normal(b))
}

/// Endpoint overrides must carry an explicit `http://` or `https://` scheme
fn require_scheme(endpoint: String) -> Result<String> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(endpoint)
    } else {
        Err(Error::configuration(format!(
            "endpoint URL '{endpoint}' must start with http:// or https://"
        )))
    }
}
