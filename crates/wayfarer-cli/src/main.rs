//! Wayfarer terminal client entry point.
//!
//! Binary name: `wayf`
//!
//! Parses CLI arguments, initializes the local store and backend clients,
//! then dispatches to the chat view, the search view, or a one-shot
//! command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let directives = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,wayfarer_core=debug,wayfarer_infra=debug,wayfarer_cli=debug",
        _ => "trace",
    };
    if let Err(e) = wayfarer_observe::init_tracing(directives, cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "wayf", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (store, config, clients)
    let state = AppState::init().await?;

    let result = match cli.command {
        Commands::Chat => cli::chat::run_chat_view(&state).await,
        Commands::Search { query } => cli::search::run_search_view(&state, query).await,
        Commands::Reset { force } => cli::reset::reset_session(&state, force, cli.json).await,
        Commands::Status => cli::status::status(&state, cli.json).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    wayfarer_observe::shutdown_tracing();
    result
}
