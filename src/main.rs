//! Rewind - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, RewindConfig, ScriptRequest, run_script, tui};
use rewind_core::MoveListOrder;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play { descending } => {
            let config = if descending {
                config.with_move_list_order(MoveListOrder::Descending)
            } else {
                config
            };
            tui::run_tui(&config)
        }
        Command::Script {
            cells,
            jump,
            descending,
            json,
        } => {
            let order = if descending {
                MoveListOrder::Descending
            } else {
                *config.move_list_order()
            };
            run_headless(&config, ScriptRequest::new(cells, jump, order), json)
        }
    }
}

/// Runs a scripted game, logging to stderr so stdout carries only the result.
#[instrument(skip_all)]
fn run_headless(config: &RewindConfig, request: ScriptRequest, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        log_filter = %config.log_filter(),
        order = %config.move_list_order(),
        "Config loaded"
    );
    info!(cells = ?request.cells(), jump = ?request.jump(), "Running script");
    println!("{}", run_script(&request, json)?);
    Ok(())
}
