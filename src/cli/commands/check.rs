//! Check command implementation.
//!
//! `recce check` runs the preflight sequence against the project root and
//! renders the report. Exit code 0 means the sequence reached `Done` (warns
//! included); 1 means a fatal outcome aborted it.

use std::path::{Path, PathBuf};

use crate::checks::{CheckOutcome, Preflight, RunReport};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn render(&self, report: &RunReport, layout: &ProjectLayout, ui: &mut dyn UserInterface) {
        ui.show_header("Preflight checks");

        if ui.output_mode().shows_detail() {
            ui.message(&format!("Project root: {}", layout.root().display()));
            ui.message(&format!("Price data:   {}", layout.dataset_path().display()));
            ui.message(&format!("Manifest:     {}", layout.manifest_path().display()));
            ui.message("");
        }

        let show_passes = ui.output_mode().shows_passes();
        for result in &report.results {
            let line = format!("{}: {}", result.name.title(), result.outcome.detail());
            match &result.outcome {
                CheckOutcome::Pass { .. } if !show_passes => {}
                CheckOutcome::Pass { .. } => ui.success(&line),
                CheckOutcome::Warn { .. } => ui.warning(&line),
                CheckOutcome::Fail { .. } => ui.error(&line),
            }
            if let Some(hint) = result.outcome.hint() {
                ui.show_hint(hint);
            }
        }

        ui.message("");
        ui.message(&format!(
            "Passed: {}/{}",
            report.passed(),
            report.results.len()
        ));
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let layout = ProjectLayout::resolve(&self.project_root)?;
        let report = Preflight::new(&layout).with_extended(self.args.full).run()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            self.render(&report, &layout, ui);
            if report.ok() {
                ui.success("All preflight checks passed!");
            } else {
                ui.error("Preflight failed. Fix the issues above and retry.");
            }
        }

        if report.ok() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(dataset: Option<&str>, deps: bool, manifest: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        if let Some(content) = dataset {
            fs::create_dir_all(layout.dataset_path().parent().unwrap()).unwrap();
            fs::write(layout.dataset_path(), content).unwrap();
        }
        if deps {
            fs::create_dir_all(layout.node_modules_path()).unwrap();
        }
        if let Some(content) = manifest {
            fs::create_dir_all(layout.manifest_path().parent().unwrap()).unwrap();
            fs::write(layout.manifest_path(), content).unwrap();
        }
        temp
    }

    #[test]
    fn complete_project_succeeds() {
        let temp = setup_project(
            Some(r#"{"siteA": {"data": {"title": "Widget"}}}"#),
            true,
            Some(r#"{"name": "frontend", "scripts": {"dev": "start-dev", "build": "build-site"}}"#),
        );
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|m| m.contains("Widget")));
        assert!(ui.successes().iter().any(|m| m.contains("dev, build")));
        assert!(ui.messages().iter().any(|m| m.contains("Passed: 3/3")));
    }

    #[test]
    fn missing_dataset_succeeds_with_warning() {
        let temp = setup_project(None, true, Some(r#"{"name": "frontend"}"#));
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.warnings().iter().any(|m| m.contains("not found")));
        assert!(ui.hints().iter().any(|m| m.contains("scraper")));
    }

    #[test]
    fn malformed_dataset_fails() {
        let temp = setup_project(Some("{invalid"), true, Some(r#"{"name": "frontend"}"#));
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        // The dependency check never ran.
        assert!(ui
            .successes()
            .iter()
            .all(|m| !m.contains("dependencies are installed")));
    }

    #[test]
    fn missing_dependencies_fail() {
        let temp = setup_project(Some("{}"), false, Some(r#"{"name": "frontend"}"#));
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.hints().iter().any(|m| m.contains("npm install")));
    }

    #[test]
    fn missing_manifest_fails() {
        let temp = setup_project(Some("{}"), true, None);
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.errors().iter().any(|m| m.contains("manifest")));
    }

    #[test]
    fn quiet_mode_suppresses_passing_lines() {
        let temp = setup_project(
            Some(r#"{"siteA": {"data": {"title": "Widget"}}}"#),
            true,
            Some(r#"{"name": "frontend"}"#),
        );
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = crate::ui::MockUI::with_mode(crate::ui::OutputMode::Quiet);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.successes(), ["All preflight checks passed!"]);
    }

    #[test]
    fn invalid_project_root_is_an_error() {
        let cmd = CheckCommand::new(
            Path::new("/no/such/recce/project"),
            CheckArgs::default(),
        );
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn json_output_is_machine_readable() {
        let temp = setup_project(Some("{}"), true, Some(r#"{"name": "frontend"}"#));
        let cmd = CheckCommand::new(
            temp.path(),
            CheckArgs {
                json: true,
                full: false,
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let raw = ui.messages().join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["phase"], "done");
        assert_eq!(parsed["checks"].as_array().unwrap().len(), 3);
        // Human rendering is suppressed in JSON mode.
        assert!(ui.headers().is_empty());
    }
}
