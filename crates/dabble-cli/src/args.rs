use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{MatchArgs, MaterialsArgs, SavedCommands, ShowArgs};

/// Find a craft for the materials and time you have
///
/// Dabble ranks a catalog of craft projects by how well they fit the
/// materials you hold and the time you can spare, and keeps a list of the
/// crafts you save. Running it without a command lists every craft, quickest
/// first.
#[derive(Parser)]
#[command(version, about, name = "dabble")]
pub struct Args {
    /// Path to the SQLite database file holding saved crafts. Defaults to
    /// $XDG_DATA_HOME/dabble/dabble.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON craft catalog. Defaults to the bundled catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Dabble CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the materials used across the catalog
    #[command(alias = "m")]
    Materials(MaterialsArgs),
    /// Rank crafts by the materials you have and the time you can spare
    #[command(alias = "find")]
    Match(MatchArgs),
    /// Show a craft's details and instructions
    Show(ShowArgs),
    /// Manage saved crafts
    #[command(alias = "s")]
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}
