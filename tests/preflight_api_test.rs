//! Integration tests for the public preflight API.

use std::fs;

use recce::checks::{CheckName, CheckOutcome, CheckPhase, Preflight};
use recce::layout::ProjectLayout;
use tempfile::TempDir;

fn fixture(dataset: Option<&str>, deps: bool, manifest: Option<&str>) -> (TempDir, ProjectLayout) {
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
    (temp, layout)
}

#[test]
fn checks_run_in_fixed_order() {
    let (_temp, layout) = fixture(Some("{}"), true, Some(r#"{"name": "frontend"}"#));
    let report = Preflight::new(&layout).run().unwrap();

    let order: Vec<CheckName> = report.results.iter().map(|r| r.name).collect();
    assert_eq!(
        order,
        [
            CheckName::Dataset,
            CheckName::Dependencies,
            CheckName::Manifest
        ]
    );
}

#[test]
fn first_fatal_outcome_wins() {
    // Both dependencies and manifest are missing; only the dependency
    // failure is reported because the sequence aborts there.
    let (_temp, layout) = fixture(Some("{}"), false, None);
    let report = Preflight::new(&layout).run().unwrap();

    assert_eq!(report.phase, CheckPhase::Aborted);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results.last().unwrap().name, CheckName::Dependencies);
}

#[test]
fn dataset_warn_does_not_count_as_passed() {
    let (_temp, layout) = fixture(None, true, Some(r#"{"name": "frontend"}"#));
    let report = Preflight::new(&layout).run().unwrap();

    assert!(report.ok());
    assert_eq!(report.passed(), 2);
    assert_eq!(report.results.len(), 3);
}

#[test]
fn dataset_sample_uses_first_declared_entry() {
    let (_temp, layout) = fixture(
        Some(r#"{"first": {"data": {"title": "Alpha"}}, "second": {"data": {"title": "Beta"}}}"#),
        true,
        Some(r#"{"name": "frontend"}"#),
    );
    let report = Preflight::new(&layout).run().unwrap();

    let dataset = &report.results[0].outcome;
    assert!(dataset.detail().contains("2 site(s)"));
    assert!(dataset.detail().contains("first — Alpha"));
    assert!(!dataset.detail().contains("Beta"));
}

#[test]
fn manifest_scripts_keep_declared_order() {
    let (_temp, layout) = fixture(
        Some("{}"),
        true,
        Some(r#"{"name": "frontend", "scripts": {"zzz": "a", "aaa": "b", "mmm": "c"}}"#),
    );
    let report = Preflight::new(&layout).run().unwrap();

    let manifest = &report.results[2].outcome;
    assert!(manifest.detail().contains("zzz, aaa, mmm"));
}

#[test]
fn malformed_manifest_is_a_curated_failure() {
    let (_temp, layout) = fixture(Some("{}"), true, Some("{broken"));
    let report = Preflight::new(&layout).run().unwrap();

    assert_eq!(report.phase, CheckPhase::Aborted);
    let manifest = &report.results[2].outcome;
    assert!(matches!(manifest, CheckOutcome::Fail { .. }));
    assert!(manifest.detail().contains("not valid JSON"));
}

#[test]
fn checker_never_mutates_the_fixture() {
    let (_temp, layout) = fixture(
        Some(r#"{"siteA": {"data": {"title": "Widget"}}}"#),
        true,
        Some(r#"{"name": "frontend", "scripts": {"dev": "start-dev"}}"#),
    );
    let dataset_before = fs::read_to_string(layout.dataset_path()).unwrap();
    let manifest_before = fs::read_to_string(layout.manifest_path()).unwrap();

    Preflight::new(&layout).with_extended(true).run().unwrap();

    assert_eq!(
        fs::read_to_string(layout.dataset_path()).unwrap(),
        dataset_before
    );
    assert_eq!(
        fs::read_to_string(layout.manifest_path()).unwrap(),
        manifest_before
    );
}

#[test]
fn report_json_shape_is_stable() {
    let (_temp, layout) = fixture(None, true, Some(r#"{"name": "frontend"}"#));
    let report = Preflight::new(&layout).run().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["phase"], "done");
    assert_eq!(json["checks"][0]["name"], "dataset");
    assert_eq!(json["checks"][0]["status"], "warn");
    assert!(json["checks"][0]["hint"].is_string());
    assert_eq!(json["checks"][1]["status"], "pass");
}
