//! Code Window CLI
//!
//! Lays out generated event payloads and prepares generator requests.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

use cw_core::config::load_from_env;
use cw_core::rules::RULESET_VERSION;
use cw_core::tagging::{zone_table, CATEGORY_TABLE, COLOUR_TABLE};
use cw_core::{build, validate, Layout, ScenarioPrompt, Surface};

mod telemetry;

#[derive(Parser)]
#[command(name = "codewindow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build tactical code window layouts from generated event lists", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Playing surface (overrides CODEWINDOW_SURFACE and the config file)
    #[arg(long, global = true)]
    surface: Option<Surface>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a generated payload and print its layout
    Layout {
        /// Payload file, or "-" for stdin
        #[arg(long, default_value = "-")]
        payload: PathBuf,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the chat-completions request body for a scenario
    Prompt {
        /// Tactical scenario description
        #[arg(long)]
        scenario: String,
    },

    /// Print the zone table for the surface
    Zones,

    /// Print the built-in classification, colour and zone rules
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    telemetry::init_tracing(cli.json_logs, level);

    let mut config = load_from_env().map_err(anyhow::Error::msg)?;
    if let Some(surface) = cli.surface {
        config.surface = surface;
    }
    debug!(surface = %config.surface, "resolved configuration");

    match cli.command {
        Commands::Layout { payload, format } => {
            let raw = read_payload(&payload)?;
            let events = match validate(&raw) {
                Ok(events) => events,
                Err(e) => bail!("{} ({e})", e.user_message()),
            };
            let layout = build(&events, config.surface);
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&layout)?);
                }
                OutputFormat::Text => print_layout(&layout),
            }
        }

        Commands::Prompt { scenario } => {
            let prompt = ScenarioPrompt::new(&scenario).map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let request = prompt.request(&config.generation, config.surface);
            println!("{}", serde_json::to_string_pretty(&request.to_chat_body())?);
        }

        Commands::Zones => {
            let zones = cw_core::describe_zones_json(config.surface).map_err(anyhow::Error::msg)?;
            let value: serde_json::Value = serde_json::from_str(&zones)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }

        Commands::Rules => {
            let rules = serde_json::json!({
                "version": RULESET_VERSION,
                "category": CATEGORY_TABLE,
                "colour": COLOUR_TABLE,
                "zones": {
                    "soccer": zone_table(Surface::Soccer),
                    "basketball": zone_table(Surface::Basketball),
                },
            });
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }

    Ok(())
}

fn read_payload(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read payload from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))
}

fn print_layout(layout: &Layout) {
    println!("Code window ({})", layout.surface());
    for group in layout.groups() {
        println!();
        println!("== {} ==", group.label);
        for placed in &group.events {
            println!(
                "  {:<32} [{} ({},{})] {}",
                placed.name(),
                placed.zone_name,
                placed.x,
                placed.y,
                placed.hex
            );
            if !placed.labels().is_empty() {
                println!("  {:<32} {}", "", placed.labels().join(", "));
            }
        }
    }
}
