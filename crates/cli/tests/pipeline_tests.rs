use async_trait::async_trait;
use ssmenv::{run, ParameterFetcher, ParameterStore, StaticParameterStore};
use ssmenv_config::{Config, ConfigLoader, HeaderMode};
use ssmenv_core::{Error, ResolvedParameters, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn config_in(dir: &Path, header: HeaderMode) -> Config {
    ConfigLoader::with_environment(HashMap::new())
        .input_file(Some(dir.join(".env.example")))
        .output_file(Some(dir.join(".env.local")))
        .header(header)
        .load()
        .unwrap()
}

fn static_fetcher(pairs: &[(&str, &str)]) -> ParameterFetcher {
    let parameters: ResolvedParameters = pairs.iter().copied().collect();
    ParameterFetcher::new(Box::new(StaticParameterStore::new(parameters)))
}

struct CountingStore {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ParameterStore for CountingStore {
    async fn get_parameters(&self, _names: &[String]) -> Result<ResolvedParameters> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ResolvedParameters::new())
    }
}

struct UnreachableStore;

#[async_trait]
impl ParameterStore for UnreachableStore {
    async fn get_parameters(&self, _names: &[String]) -> Result<ResolvedParameters> {
        Err(Error::parameter_store(
            "GetParameters",
            "dispatch failure: connection refused",
        ))
    }
}

#[tokio::test]
async fn test_resolves_realistic_template() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Disabled);
    fs::write(
        &config.input_file,
        r#"# Application
APP_NAME=billing
APP_PORT = 8080   # http listener

# Database
DATABASE_URL=postgres://billing@db:5432/billing?sslmode=require
DATABASE_PASSWORD=ssm:/billing/prod/db/password
READ_REPLICA_PASSWORD=ssm:/billing/prod/db/password

# Third parties
STRIPE_KEY=ssm:/billing/prod/stripe/key # rotated monthly
LEGACY_TOKEN=ssm:/billing/prod/legacy
PLACEHOLDER=ssm:
FEATURE_FLAGS=
see docs/billing.md for the rest
"#,
    )
    .unwrap();

    let fetcher = static_fetcher(&[
        ("/billing/prod/db/password", "s3cr3t"),
        ("/billing/prod/stripe/key", "sk_live_123"),
    ]);

    let summary = run(&config, &fetcher).await.unwrap();

    let expected = "\
# Application
APP_NAME=billing
APP_PORT=8080 # http listener
# Database
DATABASE_URL=postgres://billing@db:5432/billing?sslmode=require
DATABASE_PASSWORD=s3cr3t
READ_REPLICA_PASSWORD=s3cr3t
# Third parties
STRIPE_KEY=sk_live_123 # rotated monthly
LEGACY_TOKEN= # ssm:/billing/prod/legacy not found
PLACEHOLDER=ssm:
FEATURE_FLAGS=
# see docs/billing.md for the rest
";
    assert_eq!(fs::read_to_string(&config.output_file).unwrap(), expected);
    assert_eq!(summary.directives, 13);
    assert_eq!(summary.deferred, 4);
    assert_eq!(summary.unresolved, vec!["/billing/prod/legacy".to_string()]);
}

#[tokio::test]
async fn test_output_starts_with_provenance_header() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Timestamped);
    fs::write(&config.input_file, "VARIABLE=some-value\n").unwrap();

    run(&config, &static_fetcher(&[])).await.unwrap();

    let output = fs::read_to_string(&config.output_file).unwrap();
    let mut lines = output.lines();
    let created = lines
        .next()
        .and_then(|line| line.strip_prefix("# Created at "))
        .expect("header line");
    assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
    assert!(created.ends_with('Z'));
    assert_eq!(lines.next(), Some("# ---"));
    assert_eq!(lines.next(), Some("VARIABLE=some-value"));
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn test_store_not_called_without_references() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Disabled);
    fs::write(&config.input_file, "# only plain values\nA=1\nB=ssm:\n").unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let fetcher = ParameterFetcher::new(Box::new(CountingStore {
        calls: calls.clone(),
    }));

    run(&config, &fetcher).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        fs::read_to_string(&config.output_file).unwrap(),
        "# only plain values\nA=1\nB=ssm:\n"
    );
}

#[tokio::test]
async fn test_store_called_once_for_many_references() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Disabled);
    let template: String = (0..25).map(|i| format!("VAR_{i}=ssm:/app/{i}\n")).collect();
    fs::write(&config.input_file, template).unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let fetcher = ParameterFetcher::new(Box::new(CountingStore {
        calls: calls.clone(),
    }));

    let summary = run(&config, &fetcher).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(summary.unresolved.len(), 25);
}

#[tokio::test]
async fn test_store_failure_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Disabled);
    fs::write(&config.input_file, "VAR=ssm:/path/to/param\n").unwrap();
    fs::write(&config.output_file, "PREVIOUS=run\n").unwrap();

    let fetcher = ParameterFetcher::new(Box::new(UnreachableStore));
    let err = run(&config, &fetcher).await.unwrap_err();

    assert!(err.is_parameter_store());
    assert_eq!(
        fs::read_to_string(&config.output_file).unwrap(),
        "PREVIOUS=run\n"
    );
}

#[tokio::test]
async fn test_missing_input_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Disabled);

    let err = run(&config, &static_fetcher(&[])).await.unwrap_err();

    assert!(matches!(err, Error::FileSystem { .. }));
    assert!(err.to_string().contains(".env.example"));
    assert!(!config.output_file.exists());
}

#[tokio::test]
async fn test_non_utf8_input_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Disabled);
    fs::write(&config.input_file, [0x46, 0x4f, 0x4f, 0x3d, 0xff, 0xfe]).unwrap();

    let err = run(&config, &static_fetcher(&[])).await.unwrap_err();

    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(!config.output_file.exists());
}

#[tokio::test]
async fn test_empty_template_writes_header_only() {
    let temp = TempDir::new().unwrap();
    let config = config_in(temp.path(), HeaderMode::Timestamped);
    fs::write(&config.input_file, "\n   \n").unwrap();

    let summary = run(&config, &static_fetcher(&[])).await.unwrap();

    let output = fs::read_to_string(&config.output_file).unwrap();
    assert_eq!(output.lines().count(), 2);
    assert!(output.ends_with("# ---\n"));
    assert_eq!(summary.directives, 0);
}
