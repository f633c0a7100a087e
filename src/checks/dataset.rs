//! Price dataset check.
//!
//! The dataset is produced by the external scraper, so its absence is a
//! normal state during initial setup and only warns. A dataset that exists
//! but fails to parse points at a scraper or pipeline defect and is the one
//! condition this check treats as fatal.

use std::fs;

use serde_json::Value;

use crate::checks::CheckOutcome;
use crate::error::Result;
use crate::layout::ProjectLayout;

/// Verify the scraped price dataset exists and parses as JSON.
///
/// On success the outcome reports the number of top-level site entries and,
/// when nonempty, one sample entry's id and `data.title`.
pub fn run(layout: &ProjectLayout) -> Result<CheckOutcome> {
    let path = layout.dataset_path();
    if !path.exists() {
        return Ok(CheckOutcome::Warn {
            detail: format!("Price data not found: {}", path.display()),
            hint: Some(
                "This is OK for initial setup. Run the scraper to generate it: \
                 python backend/scraper.py"
                    .to_string(),
            ),
        });
    }

    let raw = fs::read_to_string(&path)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(data) => Ok(CheckOutcome::Pass {
            detail: describe_dataset(&data),
        }),
        Err(e) => Ok(CheckOutcome::Fail {
            detail: format!("Price data is not valid JSON: {}", e),
            hint: Some("Delete the file and re-run the scraper.".to_string()),
        }),
    }
}

fn describe_dataset(data: &Value) -> String {
    let sites = data.as_object();
    let count = sites.map(|m| m.len()).unwrap_or(0);
    let mut detail = format!("Valid JSON with {} site(s)", count);

    if let Some((id, record)) = sites.and_then(|m| m.iter().next()) {
        let title = record
            .get("data")
            .and_then(|d| d.get("title"))
            .and_then(Value::as_str)
            .unwrap_or("N/A");
        detail.push_str(&format!(" — sample: {} — {}", id, title));
    }

    detail
}
