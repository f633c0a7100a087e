//! Project layout resolution.
//!
//! The project root is an explicit input (from `--project` or the current
//! directory), never derived from the binary's own location, so the checker
//! can be pointed at arbitrary directory fixtures.

use std::path::{Path, PathBuf};

use crate::error::{RecceError, Result};

/// Resolved filesystem layout of the project under inspection.
///
/// All artifact paths are derived from a single injected root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the given directory without validating it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a layout rooted at the given directory, failing if the
    /// directory does not exist.
    pub fn resolve(root: &Path) -> Result<Self> {
        if root.is_dir() {
            Ok(Self::new(root))
        } else {
            Err(RecceError::InvalidProjectRoot {
                path: root.to_path_buf(),
            })
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The scraped price dataset published to the frontend.
    pub fn dataset_path(&self) -> PathBuf {
        self.root
            .join("frontend")
            .join("public")
            .join("data")
            .join("prices.json")
    }

    /// The frontend dependency install marker.
    pub fn node_modules_path(&self) -> PathBuf {
        self.root.join("frontend").join("node_modules")
    }

    /// The frontend package manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("frontend").join("package.json")
    }

    /// The scraper's site configuration.
    pub fn scraper_config_path(&self) -> PathBuf {
        self.root.join("backend").join("configs").join("sites.json")
    }
}
