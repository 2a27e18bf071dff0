//! Main chat view loop.
//!
//! Coordinates the conversation lifecycle: session recovery from the local
//! store, the welcome banner, the input loop, request dispatch, and
//! write-through persistence after every transition that touches the
//! transcript.
//!
//! Requests are fire-and-forget: the view stays interactive while one is
//! outstanding, and a second submit issues a second concurrent request.
//! Completed batches are applied in arrival order off a `FuturesUnordered`
//! set.

use console::style;
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use wayfarer_core::backend::ChatBackend;
use wayfarer_core::render::display_message;
use wayfarer_core::session::ChatSessionController;
use wayfarer_types::error::BackendError;
use wayfarer_types::message::Message;

use crate::cli::input::{InputEvent, ViewInput};
use crate::state::AppState;

use super::banner::{print_welcome_banner, print_welcome_screen};
use super::commands::{self, ChatCommand};
use super::renderer::ChatRenderer;

type InFlight = FuturesUnordered<BoxFuture<'static, Result<Vec<Message>, BackendError>>>;

/// Run the interactive chat view.
pub async fn run_chat_view(state: &AppState) -> anyhow::Result<()> {
    // Recover the saved session, or start fresh and persist the new id.
    let saved = state.session_store.load().await?;
    let mut controller = match saved.session_id {
        Some(id) => ChatSessionController::restore(id, saved.transcript),
        None => ChatSessionController::new(),
    };
    state
        .session_store
        .save_session_id(controller.session_id())
        .await?;

    print_welcome_banner(
        controller.session_id(),
        &state.config.backend.chat_base_url,
    );

    let renderer = ChatRenderer::new();

    // Replay the recovered conversation, or show the welcome screen.
    if controller.transcript().is_empty() {
        print_welcome_screen();
    } else {
        for message in controller.transcript() {
            if let Some(block) = renderer.render(&display_message(message)) {
                println!("{block}");
                println!();
            }
        }
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) = ViewInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    let mut in_flight: InFlight = FuturesUnordered::new();
    let mut spinner: Option<ProgressBar> = None;

    loop {
        tokio::select! {
            event = input.read_line() => match event {
                InputEvent::Eof => {
                    println!("\n  {}", style("Until next time.").dim());
                    break;
                }
                InputEvent::Interrupted => {
                    println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                }
                InputEvent::Line(text) => {
                    if text.is_empty() {
                        continue;
                    }

                    if let Some(cmd) = commands::parse(&text) {
                        match cmd {
                            ChatCommand::Help => commands::print_help(),
                            ChatCommand::Clear => input.clear(),
                            ChatCommand::History => print_history(&controller),
                            ChatCommand::New => {
                                controller.reset();
                                if let Err(e) = state.session_store.clear().await {
                                    warn!(error = %e, "failed to clear saved session");
                                }
                                if let Err(e) = state
                                    .session_store
                                    .save_session_id(controller.session_id())
                                    .await
                                {
                                    warn!(error = %e, "failed to persist new session id");
                                }
                                println!(
                                    "\n  {} New conversation started (session {}).\n",
                                    style("*").cyan().bold(),
                                    style(&controller.session_id()[..8]).dim()
                                );
                            }
                            ChatCommand::Exit => {
                                println!("\n  {}", style("Until next time.").dim());
                                break;
                            }
                            ChatCommand::Unknown(name) => {
                                println!(
                                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                    style("?").yellow().bold(),
                                    style(name).dim()
                                );
                            }
                        }
                        continue;
                    }

                    // Optimistic append: the user message lands in the
                    // transcript (and the store) before the request resolves.
                    let Some(request) = controller.submit(&text) else {
                        continue;
                    };
                    persist_transcript(state, &controller).await;

                    let backend = state.chat_backend.clone();
                    in_flight.push(Box::pin(async move {
                        backend.send_query(&request.session_id, &request.query).await
                    }));

                    if spinner.is_none() {
                        spinner = Some(start_spinner());
                    }
                }
            },
            Some(result) = in_flight.next(), if !in_flight.is_empty() => {
                match result {
                    Ok(items) => {
                        for item in items {
                            let display = display_message(&item);
                            controller.append_response_item(item);
                            // Pending clears on the first appended item, and
                            // the indicator follows it down immediately.
                            if !controller.is_pending() {
                                if let Some(pb) = spinner.take() {
                                    pb.finish_and_clear();
                                }
                            }
                            if let Some(block) = renderer.render(&display) {
                                println!("{block}");
                                println!();
                            }
                        }
                        persist_transcript(state, &controller).await;
                    }
                    Err(error) => {
                        controller.apply_failure(&error);
                        if let Some(pb) = spinner.take() {
                            pb.finish_and_clear();
                        }
                        if let Some(message) = controller.error_message() {
                            println!("\n  {} {}\n", style("!").red().bold(), message);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Write the whole transcript through to the durable store.
///
/// Runs after every transition, writes only while the transcript is
/// non-empty, and re-serializes everything each time.
async fn persist_transcript(state: &AppState, controller: &ChatSessionController) {
    if controller.transcript().is_empty() {
        return;
    }
    if let Err(e) = state
        .session_store
        .save_transcript(controller.transcript())
        .await
    {
        warn!(error = %e, "failed to persist transcript");
    }
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Print a compact listing of the conversation so far.
fn print_history(controller: &ChatSessionController) {
    if controller.transcript().is_empty() {
        println!("\n  {}\n", style("Nothing here yet.").dim());
        return;
    }

    println!();
    for message in controller.transcript() {
        match message {
            Message::User(content) => {
                println!("  {} {}", style("You").green().bold(), preview(content));
            }
            Message::Text(content) => {
                println!("  {} {}", style("Wayfarer").cyan().bold(), preview(content));
            }
            Message::Table(rows) => {
                println!(
                    "  {} {}",
                    style("Wayfarer").cyan().bold(),
                    style(format!("[table, {} rows]", rows.len())).dim()
                );
            }
            Message::Plot(reference) => {
                println!(
                    "  {} {}",
                    style("Wayfarer").cyan().bold(),
                    style(format!("[image] {reference}")).dim()
                );
            }
            Message::Unknown => {}
        }
    }
    println!();
}

fn preview(content: &str) -> String {
    const LIMIT: usize = 100;
    let flat = content.replace('\n', " ");
    if flat.chars().count() > LIMIT {
        let cut: String = flat.chars().take(LIMIT - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}
