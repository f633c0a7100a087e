//! Command-line interface.
//!
//! - [`args`] - clap argument definitions
//! - [`commands`] - command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ListArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
