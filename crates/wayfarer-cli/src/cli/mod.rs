//! CLI command definitions and dispatch for the `wayf` binary.
//!
//! Uses clap derive macros for argument parsing. The two interactive views
//! (`wayf chat`, `wayf search`) each own their state for the lifetime of
//! the command; the remaining commands are one-shot.

pub mod chat;
pub mod input;
pub mod reset;
pub mod search;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Travel assistant and vacation-rental explorer in your terminal.
#[derive(Parser)]
#[command(name = "wayf", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text (status only).
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export traces via OpenTelemetry (stdout exporter).
    #[arg(long, global = true, hide = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive chat view.
    Chat,

    /// Open the interactive listings search view.
    Search {
        /// Initial query (defaults to the unfiltered first load).
        query: Option<String>,
    },

    /// Clear the saved conversation and session identifier.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        force: bool,
    },

    /// Show configuration and saved-session summary.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
