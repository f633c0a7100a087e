//! Scraper configuration check (supplemental).

use crate::checks::CheckOutcome;
use crate::error::Result;
use crate::layout::ProjectLayout;

/// Verify the scraper's site configuration exists.
///
/// Advisory: the frontend can build without it, but the scraper cannot run.
pub fn run(layout: &ProjectLayout) -> Result<CheckOutcome> {
    let path = layout.scraper_config_path();
    if path.is_file() {
        Ok(CheckOutcome::Pass {
            detail: format!("Configuration found: {}", path.display()),
        })
    } else {
        Ok(CheckOutcome::Warn {
            detail: format!("Configuration not found: {}", path.display()),
            hint: Some("Create backend/configs/sites.json before running the scraper.".to_string()),
        })
    }
}
