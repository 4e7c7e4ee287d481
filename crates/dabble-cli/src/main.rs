//! Dabble CLI Application
//!
//! Command-line interface for the dabble craft finder.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use dabble_core::{FilterState, SessionBuilder};
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog)
        .build()
        .context("Failed to initialize session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Dabble started");

    let mut cli = Cli::new(session, renderer);
    match command {
        Some(Materials(args)) => cli.list_materials(args),
        Some(Match(args)) => cli.find_crafts(args.into()),
        Some(Show(args)) => cli.show_craft(args.id),
        Some(Saved { command }) => cli.handle_saved_command(command),
        None => cli.find_crafts(FilterState::default()),
    }
}
