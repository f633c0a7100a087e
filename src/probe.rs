//! Local system probes.
//!
//! Environment facts the checks and the CLI need: whether we are running
//! under CI, and which Node.js runtime (if any) is on PATH.

use std::fmt;
use std::process::Command;

use regex::Regex;

/// Check if running in a CI environment.
///
/// Used to force the non-interactive UI in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// A Node.js runtime version as reported by `node --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Probe the Node.js runtime on PATH.
///
/// Returns `None` when the binary is missing, exits nonzero, or prints
/// something that does not look like a version.
pub fn detect_node() -> Option<NodeVersion> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    parse_node_version(stdout.trim())
}

/// Extract a version triple from `node --version` output (e.g. "v20.11.1").
pub fn parse_node_version(raw: &str) -> Option<NodeVersion> {
    let re = Regex::new(r"v?(\d+)\.(\d+)\.(\d+)").ok()?;
    let caps = re.captures(raw)?;
    Some(NodeVersion {
        major: caps[1].parse().ok()?,
        minor: caps[2].parse().ok()?,
        patch: caps[3].parse().ok()?,
    })
}
