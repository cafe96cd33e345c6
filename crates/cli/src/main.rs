use clap::Parser;
use ssmenv::{run, ParameterFetcher, SsmParameterStore};
use ssmenv_config::{ConfigLoader, HeaderMode};
use ssmenv_utils::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ssmenv")]
#[command(
    about = "Resolve ssm: references in an env template using AWS Parameter Store",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Template to read [default: $INPUT_FILE or .env.example]
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to write [default: $OUTPUT_FILE or .env.local]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// AWS region [default: $AWS_REGION or us-east-1]
    #[arg(long)]
    region: Option<String>,

    /// Parameter Store endpoint override with scheme, e.g. http://localhost:4566
    #[arg(long, value_name = "URL")]
    endpoint_url: Option<String>,

    /// Do not write the "# Created at" header
    #[arg(long)]
    no_header: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    logging::init(if cli.quiet { "warn" } else { "info" })
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    let config = ConfigLoader::new()
        .input_file(cli.input)
        .output_file(cli.output)
        .region(cli.region)
        .endpoint_url(cli.endpoint_url)
        .header(if cli.no_header {
            HeaderMode::Disabled
        } else {
            HeaderMode::Timestamped
        })
        .load()?;

    let store = SsmParameterStore::new(&config.aws).await;
    let fetcher = ParameterFetcher::new(Box::new(store));

    match run(&config, &fetcher).await {
        Ok(summary) => {
            for path in &summary.unresolved {
                tracing::warn!(path = %path, "Parameter not found, variable left empty");
            }
            tracing::info!("Script completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Script failed");
            Err(e.into())
        }
    }
}
