//! Package manifest check.
//!
//! A malformed manifest is a curated `Fail` outcome, symmetric with the
//! dataset check, rather than a propagated parse error.

use std::fs;

use serde::Deserialize;
use serde_json::Value;

use crate::checks::CheckOutcome;
use crate::error::Result;
use crate::layout::ProjectLayout;

/// The subset of package.json the check reports on.
///
/// `scripts` preserves declared order (serde_json's `preserve_order`
/// feature), so the report lists scripts as the manifest declares them.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: String,
    #[serde(default)]
    scripts: serde_json::Map<String, Value>,
}

/// Verify the frontend package manifest exists and parses, reporting the
/// declared project name and script names.
pub fn run(layout: &ProjectLayout) -> Result<CheckOutcome> {
    let path = layout.manifest_path();
    if !path.exists() {
        return Ok(CheckOutcome::Fail {
            detail: format!("Package manifest not found: {}", path.display()),
            hint: Some("Restore frontend/package.json before building.".to_string()),
        });
    }

    let raw = fs::read_to_string(&path)?;
    match serde_json::from_str::<PackageManifest>(&raw) {
        Ok(manifest) => Ok(CheckOutcome::Pass {
            detail: describe_manifest(&manifest),
        }),
        Err(e) => Ok(CheckOutcome::Fail {
            detail: format!("Package manifest is not valid JSON: {}", e),
            hint: Some("Fix frontend/package.json and retry.".to_string()),
        }),
    }
}

fn describe_manifest(manifest: &PackageManifest) -> String {
    if manifest.scripts.is_empty() {
        format!("{} — no scripts declared", manifest.name)
    } else {
        let scripts: Vec<&str> = manifest.scripts.keys().map(String::as_str).collect();
        format!("{} — scripts: {}", manifest.name, scripts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout_with_manifest(content: Option<&str>) -> (TempDir, ProjectLayout) {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        if let Some(content) = content {
            let path = layout.manifest_path();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        (temp, layout)
    }

    #[test]
    fn missing_manifest_fails() {
        let (_temp, layout) = layout_with_manifest(None);
        let outcome = run(&layout).unwrap();
        assert!(outcome.is_fatal());
        assert!(outcome.detail().contains("not found"));
    }

    #[test]
    fn valid_manifest_reports_name_and_scripts_in_declared_order() {
        let (_temp, layout) = layout_with_manifest(Some(
            r#"{"name": "frontend", "scripts": {"dev": "start-dev", "build": "build-site"}}"#,
        ));
        let outcome = run(&layout).unwrap();
        assert!(outcome.is_pass());
        assert!(outcome.detail().contains("frontend"));
        assert!(outcome.detail().contains("dev, build"));
    }

    #[test]
    fn manifest_without_scripts_passes() {
        let (_temp, layout) = layout_with_manifest(Some(r#"{"name": "frontend"}"#));
        let outcome = run(&layout).unwrap();
        assert!(outcome.is_pass());
        assert!(outcome.detail().contains("no scripts declared"));
    }

    #[test]
    fn malformed_manifest_fails_with_curated_message() {
        let (_temp, layout) = layout_with_manifest(Some("{broken"));
        let outcome = run(&layout).unwrap();
        assert!(outcome.is_fatal());
        assert!(outcome.detail().contains("not valid JSON"));
    }

    #[test]
    fn manifest_missing_name_fails() {
        let (_temp, layout) = layout_with_manifest(Some(r#"{"scripts": {}}"#));
        let outcome = run(&layout).unwrap();
        assert!(outcome.is_fatal());
    }
}
