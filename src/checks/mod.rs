//! Preflight checks.
//!
//! Each check inspects one prerequisite of the project and produces a
//! [`CheckOutcome`]. The [`runner`] drives the core checks in a fixed order
//! (dataset → dependencies → manifest) and aborts on the first fatal
//! outcome; the supplemental checks (Node.js runtime, scraper configuration)
//! are advisory and run only when the core sequence completes.
//!
//! Checks are strictly read-only: they query the filesystem and never
//! create, mutate, or delete anything.

pub mod dataset;
pub mod dependencies;
pub mod manifest;
pub mod node;
pub mod runner;
pub mod scraper_config;

pub use runner::{CheckPhase, CheckResult, Preflight, RunReport};

use serde::Serialize;

/// Identifies one preflight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    /// Scraped price dataset published to the frontend.
    Dataset,
    /// Frontend dependency install marker (node_modules).
    Dependencies,
    /// Frontend package manifest.
    Manifest,
    /// Node.js runtime on PATH (supplemental).
    NodeRuntime,
    /// Scraper site configuration (supplemental).
    ScraperConfig,
}

impl CheckName {
    /// All checks, core sequence first.
    pub fn all() -> [CheckName; 5] {
        [
            CheckName::Dataset,
            CheckName::Dependencies,
            CheckName::Manifest,
            CheckName::NodeRuntime,
            CheckName::ScraperConfig,
        ]
    }

    /// Short display title for report lines.
    pub fn title(&self) -> &'static str {
        match self {
            CheckName::Dataset => "Price data",
            CheckName::Dependencies => "Frontend dependencies",
            CheckName::Manifest => "Package manifest",
            CheckName::NodeRuntime => "Node.js runtime",
            CheckName::ScraperConfig => "Scraper configuration",
        }
    }

    /// One-line description for `recce list`.
    pub fn describe(&self) -> &'static str {
        match self {
            CheckName::Dataset => "prices.json exists and parses as JSON",
            CheckName::Dependencies => "frontend/node_modules is installed",
            CheckName::Manifest => "frontend/package.json declares name and scripts",
            CheckName::NodeRuntime => "node is on PATH and recent enough",
            CheckName::ScraperConfig => "backend/configs/sites.json exists",
        }
    }

    /// Whether this check is part of the core sequence (as opposed to the
    /// advisory checks behind `--full`).
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            CheckName::Dataset | CheckName::Dependencies | CheckName::Manifest
        )
    }
}

/// The result of running a single check.
///
/// `Fail` is fatal: the runner transitions to `Aborted` and no later check
/// runs. `Warn` reports a condition the user should know about but allows
/// the sequence to continue.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    /// Prerequisite is in place.
    Pass { detail: String },

    /// Prerequisite is absent or suspect, but expected during initial setup.
    Warn {
        detail: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },

    /// Prerequisite is missing or corrupted; the run aborts here.
    Fail {
        detail: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl CheckOutcome {
    /// Whether this outcome aborts the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckOutcome::Fail { .. })
    }

    /// Whether this outcome counts toward the passed total.
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass { .. })
    }

    /// The human-readable detail message.
    pub fn detail(&self) -> &str {
        match self {
            CheckOutcome::Pass { detail }
            | CheckOutcome::Warn { detail, .. }
            | CheckOutcome::Fail { detail, .. } => detail,
        }
    }

    /// The remediation hint, if one applies.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CheckOutcome::Pass { .. } => None,
            CheckOutcome::Warn { hint, .. } | CheckOutcome::Fail { hint, .. } => hint.as_deref(),
        }
    }
}
