//! Recce - Project preflight validation.
//!
//! Recce is a CLI tool that verifies a project's runtime prerequisites
//! (scraped price data, installed frontend dependencies, package manifest)
//! before the build/dev workflow runs, so missing pieces are caught early
//! with actionable messages instead of mid-build failures.
//!
//! # Modules
//!
//! - [`checks`] - Individual preflight checks and the sequential runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`layout`] - Project layout with injected root and artifact paths
//! - [`probe`] - Local system probes (CI detection, Node.js runtime)
//! - [`ui`] - Terminal output, themes, and output modes
//!
//! # Example
//!
//! ```no_run
//! use recce::checks::Preflight;
//! use recce::layout::ProjectLayout;
//!
//! let layout = ProjectLayout::new("/path/to/project");
//! let report = Preflight::new(&layout).run().unwrap();
//! if report.ok() {
//!     println!("all {} checks passed", report.results.len());
//! }
//! ```
//!
//! Recce is strictly observational: it reads the filesystem and never
//! creates, mutates, or deletes project state.

pub mod checks;
pub mod cli;
pub mod error;
pub mod layout;
pub mod probe;
pub mod ui;

pub use error::{RecceError, Result};
