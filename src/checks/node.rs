//! Node.js runtime check (supplemental).
//!
//! Advisory only: the core sequence does not depend on the runtime, so a
//! missing or old Node.js warns rather than aborts.

use crate::checks::CheckOutcome;
use crate::error::Result;
use crate::probe;

/// Minimum Node.js major version the frontend toolchain supports.
const MIN_NODE_MAJOR: u32 = 20;

/// Probe the Node.js runtime on PATH and warn when it is missing or older
/// than the supported major version.
pub fn run() -> Result<CheckOutcome> {
    Ok(evaluate(probe::detect_node()))
}

fn evaluate(detected: Option<probe::NodeVersion>) -> CheckOutcome {
    match detected {
        None => CheckOutcome::Warn {
            detail: "Node.js not found on PATH".to_string(),
            hint: Some(format!("Install Node.js {} or newer.", MIN_NODE_MAJOR)),
        },
        Some(version) if version.major < MIN_NODE_MAJOR => CheckOutcome::Warn {
            detail: format!(
                "Node.js {} found; {}+ is recommended",
                version, MIN_NODE_MAJOR
            ),
            hint: None,
        },
        Some(version) => CheckOutcome::Pass {
            detail: format!("Node.js {}", version),
        },
    }
}
