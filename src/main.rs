use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

use depot::config::{LogFormat, Settings};
use depot::infrastructure::log_messages::application as log;
use depot::validation::RuleSet;
use depot::{Fixtures, InMemoryCatalog, Locale, MessageCatalog, Product, ValidationEngine};

#[derive(Debug, Serialize)]
struct Report<'a> {
    valid: bool,
    errors: BTreeMap<String, Vec<String>>,
    full_messages: Vec<&'a str>,
}

fn main() -> Result<ExitCode> {
    let settings = Settings::new().context("loading settings")?;
    init_tracing(&settings);

    info!("{}", log::STARTING);
    info!(
        locale = %settings.validation.default_locale,
        "{}",
        log::SETTINGS_LOADED
    );

    let engine = build_engine(&settings)?;
    let catalog = build_catalog(&settings, &engine)?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading candidate product from stdin")?;
    let product: Product = serde_json::from_str(&input).context("parsing candidate product")?;

    run(&engine, &catalog, &product)
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    // Logs go to stderr so stdout carries only the report
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match settings.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn build_engine(settings: &Settings) -> Result<ValidationEngine> {
    let locale = Locale::parse(&settings.validation.default_locale)?;
    let mut messages = MessageCatalog::builtin();
    if let Some(dir) = &settings.validation.locale_dir {
        messages
            .load_dir(dir)
            .with_context(|| format!("loading locale files from {}", dir.display()))?;
        info!(dir = %dir.display(), "{}", log::LOCALE_DIR_LOADED);
    }

    Ok(ValidationEngine::new(RuleSet::product()?, Arc::new(messages)).with_locale(locale))
}

fn build_catalog(settings: &Settings, engine: &ValidationEngine) -> Result<InMemoryCatalog> {
    let mut catalog = InMemoryCatalog::new();
    if let Some(path) = &settings.catalog.fixtures {
        Fixtures::load(path)
            .and_then(|fixtures| fixtures.load_into(&mut catalog, engine))
            .with_context(|| format!("loading fixtures from {}", path.display()))?;
    }
    Ok(catalog)
}

#[instrument(skip_all)]
fn run(
    engine: &ValidationEngine,
    catalog: &InMemoryCatalog,
    product: &Product,
) -> Result<ExitCode> {
    let errors = engine.validate(product, catalog);
    let report = Report {
        valid: errors.is_empty(),
        errors: errors.to_message_map(),
        full_messages: errors.full_messages(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.valid {
        info!("{}", log::CANDIDATE_VALID);
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(violations = errors.len(), "{}", log::CANDIDATE_INVALID);
        Ok(ExitCode::FAILURE)
    }
}
