//! Command handlers.
//!
//! Each handler runs one operation on the session and renders its markdown
//! through the terminal renderer.

use anyhow::{Context, Result};
use dabble_core::{
    search_materials, FilterState, KeyValueStore, OperationStatus, Session, StoreOutcome,
};
use log::debug;

use crate::{
    cli::{MaterialsArgs, SavedCommands},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against a session.
pub struct Cli<S> {
    session: Session<S>,
    renderer: TerminalRenderer,
}

impl<S: KeyValueStore> Cli<S> {
    pub fn new(session: Session<S>, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Lists catalog materials, optionally narrowed by a search term.
    pub fn list_materials(&self, args: MaterialsArgs) -> Result<()> {
        let index = self.session.materials();
        let term = args.search.unwrap_or_default();
        let matches = search_materials(&index, &term);

        let mut output = String::from("## Materials\n\n");
        if matches.is_empty() {
            output.push_str(&format!("No materials match \"{}\".\n", term.trim()));
        } else {
            for material in matches {
                output.push_str(&format!("- {material}\n"));
            }
        }
        self.renderer.render(&output)
    }

    /// Ranks the catalog against `filter` and prints the buckets.
    pub fn find_crafts(&mut self, filter: FilterState) -> Result<()> {
        debug!("Ranking with filter {filter:?}");
        self.session.set_filter(filter);
        let output = self.session.ranked().to_string();
        self.renderer.render(&output)
    }

    /// Prints one craft in full, noting whether it is saved.
    pub fn show_craft(&self, id: u64) -> Result<()> {
        let craft = self
            .session
            .require_craft(id)
            .context("Failed to show craft")?;
        let mut output = craft.to_string();
        if self.session.is_saved(id) {
            output.push_str("\n*Saved*\n");
        }
        self.renderer.render(&output)
    }

    pub fn handle_saved_command(&mut self, command: SavedCommands) -> Result<()> {
        match command {
            SavedCommands::List => {
                let output = self.session.saved_crafts().to_string();
                self.renderer.render(&output)
            }
            SavedCommands::Add(args) => {
                let name = self
                    .session
                    .require_craft(args.id)
                    .context("Failed to save craft")?
                    .name
                    .clone();
                let outcome = self.session.save(args.id);
                self.report(outcome, &name, true)
            }
            SavedCommands::Remove(args) => {
                let name = self.craft_name(args.id);
                let outcome = self.session.unsave(args.id);
                self.report(outcome, &name, false)
            }
            SavedCommands::Toggle(args) => {
                let name = self
                    .session
                    .require_craft(args.id)
                    .context("Failed to toggle saved craft")?
                    .name
                    .clone();
                let outcome = self.session.toggle_save(args.id);
                let saved = self.session.is_saved(args.id);
                self.report(outcome, &name, saved)
            }
            SavedCommands::Clear => {
                let status = match self.session.clear_saved() {
                    StoreOutcome::Failed => {
                        OperationStatus::failure("Could not clear saved crafts".to_string())
                    }
                    StoreOutcome::Unchanged => {
                        OperationStatus::success("No saved crafts to clear".to_string())
                    }
                    StoreOutcome::Changed => {
                        OperationStatus::success("Cleared saved crafts".to_string())
                    }
                };
                self.renderer.render(&status.to_string())
            }
        }
    }

    // Unknown ids may still be stored from an older catalog.
    fn craft_name(&self, id: u64) -> String {
        self.session
            .craft(id)
            .map(|craft| craft.name.clone())
            .unwrap_or_else(|| format!("craft {id}"))
    }

    fn report(&self, outcome: StoreOutcome, name: &str, saved: bool) -> Result<()> {
        let status = OperationStatus::for_save(outcome, name, saved);
        self.renderer.render(&status.to_string())
    }
}
