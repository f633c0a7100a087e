//! Frontend dependency check.

use crate::checks::CheckOutcome;
use crate::error::Result;
use crate::layout::ProjectLayout;

/// Verify the frontend dependency install marker directory exists.
pub fn run(layout: &ProjectLayout) -> Result<CheckOutcome> {
    let path = layout.node_modules_path();
    if path.is_dir() {
        Ok(CheckOutcome::Pass {
            detail: "Frontend dependencies are installed".to_string(),
        })
    } else {
        Ok(CheckOutcome::Fail {
            detail: "Frontend dependencies are not installed".to_string(),
            hint: Some("Run: cd frontend && npm install".to_string()),
        })
    }
}
