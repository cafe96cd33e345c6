//! End-to-end run: read template, resolve references, write the env file

use crate::parameters::ParameterFetcher;
use chrono::{DateTime, SecondsFormat, Utc};
use ssmenv_config::{Config, HeaderMode};
use ssmenv_core::{Error, Result};
use ssmenv_env::{collect_paths, enrich, format, parse, unresolved_paths};
use ssmenv_utils::write_atomic_string;
use tracing::info;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Directives written to the output file
    pub directives: usize,
    /// Directives that referenced Parameter Store
    pub deferred: usize,
    /// Referenced paths the store did not return, in template order
    pub unresolved: Vec<String>,
}

/// Read `config.input_file`, resolve its `ssm:` references and write the
/// result to `config.output_file`.
///
/// Nothing is written when reading or fetching fails.
pub async fn run(config: &Config, fetcher: &ParameterFetcher) -> Result<RunSummary> {
    info!("Reading input file {}", config.input_file.display());
    let bytes = tokio::fs::read(&config.input_file)
        .await
        .map_err(|e| Error::file_system(&config.input_file, "read input file", e))?;
    let template = String::from_utf8(bytes).map_err(|e| {
        Error::invalid_input(&config.input_file, format!("not valid UTF-8: {e}"))
    })?;

    let (output, summary) = render(&template, fetcher, config.header, Utc::now()).await?;

    info!(
        "Writing environment variables to {}",
        config.output_file.display()
    );
    write_atomic_string(&config.output_file, &output)?;

    Ok(summary)
}

/// Produce the output text for `template` without touching the file system
pub async fn render(
    template: &str,
    fetcher: &ParameterFetcher,
    header: HeaderMode,
    now: DateTime<Utc>,
) -> Result<(String, RunSummary)> {
    let directives = parse(template);
    let paths = collect_paths(&directives);

    let resolved = fetcher.fetch(&paths).await?;
    let enriched = enrich(&directives, &resolved);

    let summary = RunSummary {
        directives: enriched.len(),
        deferred: paths.len(),
        unresolved: unresolved_paths(&enriched)
            .into_iter()
            .map(str::to_owned)
            .collect(),
    };

    let body = format(&enriched);
    let output = match header {
        HeaderMode::Timestamped => provenance_header(now) + &body,
        HeaderMode::Disabled => body,
    };

    Ok((output, summary))
}

/// Two comment lines recording when the file was generated
pub fn provenance_header(now: DateTime<Utc>) -> String {
    format!(
        "# Created at {}\n# ---\n",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
