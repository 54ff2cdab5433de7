//! Operator CLI for generating event share text.
//!
//! Reads events and configuration as JSON files and prints the
//! platform-ready share text on stdout, or a JSON envelope for
//! scripting. Diagnostics go to stderr so the share text stays
//! pipeable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use share_content::{Event, ShareConfig, ShareGenerator, ShareResult, CHARACTER_LIMIT};

#[derive(Parser)]
#[command(name = "share")]
#[command(about = "Generate bounded share text for upcoming events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate share text from an event file
    Generate {
        /// JSON file holding an array of events
        #[arg(long)]
        events: PathBuf,

        /// JSON file holding the share configuration
        #[arg(long)]
        config: PathBuf,

        /// Clock override (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Emit a JSON envelope instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file
    Validate {
        /// JSON file holding the share configuration
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(Serialize)]
struct Response {
    success: bool,
    result: ShareResult,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            events,
            config,
            now,
            json,
        } => run_generate(&events, &config, now, json),
        Commands::Validate { config } => run_validate(&config),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,share_content=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_generate(
    events_path: &Path,
    config_path: &Path,
    now: Option<DateTime<Utc>>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate().context("configuration rejected")?;
    let events = load_events(events_path)?;
    let now = now.unwrap_or_else(Utc::now);

    let generator = ShareGenerator::new(config);
    let result = generator.generate(&events, now);

    if json {
        let response = Response {
            success: true,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", result.share_text);

    let chars = result.share_text.chars().count();
    let mut summary = format!(
        "{chars}/{CHARACTER_LIMIT} chars, {} events",
        result.included_event_count
    );
    if result.was_truncated {
        summary.push_str(" (truncated)");
    }
    eprintln!("{} {}", "✓".green(), summary.dimmed());
    Ok(())
}

fn run_validate(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate().context("configuration rejected")?;
    println!("{} configuration is valid", "✓".green());
    Ok(())
}

fn load_config(path: &Path) -> Result<ShareConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read event file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse event file {}", path.display()))
}
