//! List command implementation.
//!
//! `recce list` enumerates the available checks and which of them are part
//! of the core sequence versus the advisory `--full` set.

use serde_json::json;

use crate::checks::CheckName;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let checks: Vec<_> = CheckName::all()
                .iter()
                .map(|name| {
                    json!({
                        "name": name,
                        "title": name.title(),
                        "description": name.describe(),
                        "core": name.is_core(),
                    })
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&checks).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Available checks");
        ui.message("Core sequence:");
        for name in CheckName::all().iter().filter(|n| n.is_core()) {
            ui.message(&format!("  {:<22} {}", name.title(), name.describe()));
        }
        ui.message("");
        ui.message("Advisory (with --full):");
        for name in CheckName::all().iter().filter(|n| !n.is_core()) {
            ui.message(&format!("  {:<22} {}", name.title(), name.describe()));
        }

        Ok(CommandResult::success())
    }
}
