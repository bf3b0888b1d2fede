mod advisor;
mod api;
mod catalog;
mod export;
mod query;
mod report;
mod settings;
mod stats;
mod view;
mod web;

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};

use crate::{
    catalog::Catalog,
    report::ReportTracker,
    settings::{Args, Provider, Settings, API_KEY_VAR},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_file(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?
        .with_api_key_fallback(env::var(API_KEY_VAR).ok());

    let level: Level = settings
        .log
        .level
        .parse()
        .with_context(|| format!("invalid log level `{}`", settings.log.level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let catalog = Catalog::malaysian().context("invalid market dataset")?;
    info!(
        "Loaded {} segments and {} case studies",
        catalog.segments().len(),
        catalog.case_studies().len()
    );

    if settings.advisor.provider == Provider::Gemini && settings.advisor.api_key.is_none() {
        warn!("No API key configured; set advisor.api_key or {API_KEY_VAR}");
    }
    let requester =
        advisor::requester(&settings.advisor).context("failed to build the report requester")?;

    let schema = api::schema(catalog.clone(), requester, ReportTracker::default());
    web::serve(schema, catalog, settings.web.address, args.tls()).await;
    Ok(())
}
