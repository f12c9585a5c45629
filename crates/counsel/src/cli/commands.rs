//! # CLI Layer
//!
//! The only place in the workspace that:
//! - Parses arguments
//! - Installs the `tracing` subscriber
//! - Writes to stdout and stderr
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Context Setup**: load [`CounselConfig`], start logging, build the [`CounselApi`]
//! 3. **API Dispatch**: call the matching facade method
//! 4. **Output Formatting**: tables and charts via `render`, or JSON
//!
//! Errors are returned to `main`, which prints them and exits with status 1.

use super::render::{print_listing, render_config, render_dashboard};
use super::session;
use super::setup::{Cli, Commands, OutputFormat};
use clap::Parser;
use counselapp::api::CounselApi;
use counselapp::commands::dashboard::{CollectionSummary, DashboardDataset, TimeRange};
use counselapp::config::CounselConfig;
use counselapp::error::Result;
use counselapp::filter::{FilterField, FilterState};
use counselapp::model::Collection;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive; overrides `log_filter` from config.
const LOG_ENV: &str = "COUNSEL_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = CounselConfig::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config);
    let mut api = CounselApi::from_config(config)?;

    match cli.command {
        Some(Commands::List {
            collection,
            status,
            category,
            search,
            output,
        }) => {
            let filter = build_filter(status, category, search)?;
            handle_list(&api, collection, &filter, output)
        }
        Some(Commands::Dashboard {
            college,
            range,
            output,
        }) => handle_dashboard(&api, college, &range, output),
        Some(Commands::Session) => {
            let stdin = std::io::stdin();
            session::run(&mut api, stdin.lock())
        }
        Some(Commands::Config { output }) => handle_config(&api, output),
        None => handle_list(&api, None, &FilterState::new(), OutputFormat::Term),
    }
}

fn init_tracing(verbose: bool, config: &CounselConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    // Fails only if a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(
    status: Option<String>,
    category: Option<String>,
    search: Option<String>,
) -> Result<FilterState> {
    let mut filter = FilterState::new();
    if let Some(status) = status {
        filter.set(FilterField::Status, &status)?;
    }
    if let Some(category) = category {
        filter.set(FilterField::Category, &category)?;
    }
    if let Some(search) = search {
        filter.set(FilterField::Query, &search)?;
    }
    Ok(filter)
}

fn handle_list(
    api: &CounselApi,
    collection: Option<String>,
    filter: &FilterState,
    output: OutputFormat,
) -> Result<()> {
    let collection: Collection = match collection {
        Some(name) => name.parse()?,
        None => api.collection(),
    };
    let listing = api.list_with(collection, filter)?;
    match output {
        OutputFormat::Term => print_listing(&listing),
        OutputFormat::Json => print_json(&listing)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct DashboardOutput<'a> {
    dataset: &'a DashboardDataset,
    summary: &'a [CollectionSummary],
}

fn handle_dashboard(
    api: &CounselApi,
    college: Option<String>,
    range: &str,
    output: OutputFormat,
) -> Result<()> {
    let range: TimeRange = range.parse()?;
    let dataset = api.dashboard(college.as_deref(), range)?;
    let summary = api.summary();
    match output {
        OutputFormat::Term => print!("{}", render_dashboard(&dataset, &summary)),
        OutputFormat::Json => print_json(&DashboardOutput {
            dataset: &dataset,
            summary: &summary,
        })?,
    }
    Ok(())
}

fn handle_config(api: &CounselApi, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Term => print!("{}", render_config(api.config())),
        OutputFormat::Json => print_json(api.config())?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
