//! Command-line argument wrappers.
//!
//! Each clap structure here converts into a core type (`FilterState`, a
//! craft id) so the core crate stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core types → Session
//! ```

use clap::{Args, Subcommand};
use dabble_core::FilterState;

/// Arguments for listing materials
#[derive(Args)]
pub struct MaterialsArgs {
    /// Only show materials containing this text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for ranking crafts
///
/// Repeat a flag or separate values with commas:
/// `--have yarn --have scissors` or `--have yarn,scissors`.
#[derive(Args)]
pub struct MatchArgs {
    /// A material you have
    #[arg(long = "have", value_name = "MATERIAL", value_delimiter = ',')]
    pub have: Vec<String>,

    /// A material you would like to use
    #[arg(long = "want", value_name = "MATERIAL", value_delimiter = ',')]
    pub want: Vec<String>,

    /// Time you can spend, in minutes
    #[arg(
        short,
        long,
        value_name = "MINUTES",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub time: Option<u32>,
}

impl From<MatchArgs> for FilterState {
    fn from(val: MatchArgs) -> Self {
        let trimmed = |materials: Vec<String>| {
            materials
                .into_iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
        };
        FilterState::new()
            .with_have(trimmed(val.have))
            .with_want(trimmed(val.want))
            .with_time_available(val.time)
    }
}

/// Arguments for showing one craft
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Unique identifier of the craft to show")]
    pub id: u64,
}

/// Arguments naming one craft in a saved-set command
#[derive(Args)]
pub struct SavedIdArgs {
    #[arg(help = "Unique identifier of the craft")]
    pub id: u64,
}

/// Saved craft commands
#[derive(Subcommand)]
pub enum SavedCommands {
    /// List saved crafts
    #[command(alias = "ls")]
    List,
    /// Save a craft
    Add(SavedIdArgs),
    /// Remove a craft from the saved list
    #[command(alias = "rm")]
    Remove(SavedIdArgs),
    /// Save a craft, or remove it if it is already saved
    Toggle(SavedIdArgs),
    /// Remove every saved craft
    Clear,
}
