//! Sequential check runner.
//!
//! The run is an explicit state machine rather than implied statement
//! order, so the abort semantics are testable:
//!
//! ```text
//! Dataset -> Dependencies -> Manifest -> Done
//!    \            |            /
//!     `-------- Aborted <-----'   (absorbing, on any fatal outcome)
//! ```

use serde::Serialize;

use crate::checks::{dataset, dependencies, manifest, node, scraper_config};
use crate::checks::{CheckName, CheckOutcome};
use crate::error::Result;
use crate::layout::ProjectLayout;

/// Phase of the core check sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckPhase {
    Dataset,
    Dependencies,
    Manifest,
    /// Core sequence completed; warns may have occurred.
    Done,
    /// A fatal outcome stopped the sequence.
    Aborted,
}

impl CheckPhase {
    /// The check this phase runs, or `None` for terminal phases.
    fn check(self) -> Option<CheckName> {
        match self {
            CheckPhase::Dataset => Some(CheckName::Dataset),
            CheckPhase::Dependencies => Some(CheckName::Dependencies),
            CheckPhase::Manifest => Some(CheckName::Manifest),
            CheckPhase::Done | CheckPhase::Aborted => None,
        }
    }

    /// The phase that follows on a non-fatal outcome.
    fn next(self) -> Self {
        match self {
            CheckPhase::Dataset => CheckPhase::Dependencies,
            CheckPhase::Dependencies => CheckPhase::Manifest,
            CheckPhase::Manifest => CheckPhase::Done,
            CheckPhase::Done => CheckPhase::Done,
            CheckPhase::Aborted => CheckPhase::Aborted,
        }
    }
}

/// One executed check and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: CheckName,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// The outcome of a full preflight run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Executed checks, in execution order. On abort this ends at the
    /// fatal check; later checks never ran.
    #[serde(rename = "checks")]
    pub results: Vec<CheckResult>,
    /// Terminal phase: `Done` or `Aborted`.
    pub phase: CheckPhase,
}

impl RunReport {
    /// Whether the run completed without a fatal outcome.
    pub fn ok(&self) -> bool {
        self.phase == CheckPhase::Done
    }

    /// Count of checks that passed outright (warns excluded).
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_pass()).count()
    }
}

/// Drives the preflight check sequence against a project layout.
pub struct Preflight<'a> {
    layout: &'a ProjectLayout,
    extended: bool,
}

impl<'a> Preflight<'a> {
    /// Create a runner for the core check sequence.
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self {
            layout,
            extended: false,
        }
    }

    /// Also run the advisory checks (Node.js runtime, scraper config)
    /// after the core sequence completes.
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Run the check sequence to a terminal phase.
    ///
    /// The first fatal outcome wins: the sequence stops there and the
    /// report's phase is `Aborted`. Warns never stop the sequence.
    pub fn run(&self) -> Result<RunReport> {
        let mut results = Vec::new();
        let mut phase = CheckPhase::Dataset;

        while let Some(name) = phase.check() {
            let outcome = self.run_check(name)?;
            tracing::debug!(check = name.title(), fatal = outcome.is_fatal(), "check complete");
            phase = if outcome.is_fatal() {
                CheckPhase::Aborted
            } else {
                phase.next()
            };
            results.push(CheckResult { name, outcome });
        }

        if phase == CheckPhase::Done && self.extended {
            for name in [CheckName::NodeRuntime, CheckName::ScraperConfig] {
                let outcome = self.run_check(name)?;
                tracing::debug!(check = name.title(), "advisory check complete");
                results.push(CheckResult { name, outcome });
            }
        }

        Ok(RunReport { results, phase })
    }

    fn run_check(&self, name: CheckName) -> Result<CheckOutcome> {
        match name {
            CheckName::Dataset => dataset::run(self.layout),
            CheckName::Dependencies => dependencies::run(self.layout),
            CheckName::Manifest => manifest::run(self.layout),
            CheckName::NodeRuntime => node::run(),
            CheckName::ScraperConfig => scraper_config::run(self.layout),
        }
    }
}
