//! Main search view loop.
//!
//! Runs the automatic first load, then a select loop over user input, the
//! placeholder rotation timer, and completed search requests. Requests are
//! fire-and-forget; the controller's sequence numbers discard stale
//! arrivals. The rotation timer runs as a separate task and is cancelled
//! through a `CancellationToken` when the view is torn down.

use std::collections::HashSet;

use console::style;
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use wayfarer_core::backend::SearchBackend;
use wayfarer_core::search::placeholder::ROTATION_INTERVAL;
use wayfarer_core::search::{PlaceholderRotation, SearchController};
use wayfarer_types::error::BackendError;
use wayfarer_types::search::SearchReply;

use crate::cli::input::{InputEvent, ViewInput};
use crate::state::AppState;

use super::commands::{self, SearchCommand};
use super::view::{print_banner, print_filters, print_results};

type InFlight = FuturesUnordered<BoxFuture<'static, (u64, Result<SearchReply, BackendError>)>>;

/// Run the interactive search view.
pub async fn run_search_view(state: &AppState, initial_query: Option<String>) -> anyhow::Result<()> {
    let mut controller = SearchController::new();
    let mut rotation = PlaceholderRotation::new();
    let mut rotating = true;
    let mut expanded: HashSet<usize> = HashSet::new();

    print_banner(&state.config.backend.search_base_url);

    let (mut input, _writer) = ViewInput::new(prompt_with(rotation.current()))
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    let mut in_flight: InFlight = FuturesUnordered::new();

    // Rotation timer: a background task ticking into the select loop,
    // cancelled when the view exits so no timer outlives the component.
    let cancel = CancellationToken::new();
    let (tick_tx, mut tick_rx) = mpsc::channel::<()>(1);
    let rotation_task = tokio::spawn(run_rotation_timer(cancel.clone(), tick_tx));

    // Automatic first load (blank input becomes the first-call sentinel).
    issue_search(
        &mut controller,
        &mut in_flight,
        state,
        initial_query.as_deref().unwrap_or(""),
    );
    let mut spinner: Option<ProgressBar> = Some(start_spinner());

    loop {
        tokio::select! {
            event = input.read_line() => match event {
                InputEvent::Eof => {
                    println!("\n  {}", style("Happy travels.").dim());
                    break;
                }
                InputEvent::Interrupted => {
                    println!("\n  {}", style("Press Ctrl+D to exit, or keep searching.").dim());
                }
                InputEvent::Line(text) => {
                    match commands::parse(&text) {
                        Some(SearchCommand::Help) => commands::print_help(),
                        Some(SearchCommand::Clear) => input.clear(),
                        Some(SearchCommand::Next) => {
                            if controller.next_page() {
                                expanded.clear();
                                print_results(&controller, &expanded);
                            } else {
                                println!("\n  {}\n", style("Already on the last page.").dim());
                            }
                        }
                        Some(SearchCommand::Prev) => {
                            if controller.prev_page() {
                                expanded.clear();
                                print_results(&controller, &expanded);
                            } else {
                                println!("\n  {}\n", style("Already on page 1.").dim());
                            }
                        }
                        Some(SearchCommand::Page(page)) => {
                            if controller.set_page(page) {
                                expanded.clear();
                                print_results(&controller, &expanded);
                            } else {
                                println!(
                                    "\n  {} No page {page} (pages: {}).\n",
                                    style("?").yellow().bold(),
                                    controller.total_pages().max(1)
                                );
                            }
                        }
                        Some(SearchCommand::Expand(number)) => {
                            if card_on_page(&controller, number) {
                                expanded.insert(number);
                                print_results(&controller, &expanded);
                            } else {
                                println!(
                                    "\n  {} No card {number} on this page.\n",
                                    style("?").yellow().bold()
                                );
                            }
                        }
                        Some(SearchCommand::Collapse(number)) => {
                            expanded.remove(&number);
                            print_results(&controller, &expanded);
                        }
                        Some(SearchCommand::Filters) => {
                            println!();
                            if controller.filters().is_empty() {
                                println!("  {}", style("No filters applied.").dim());
                            } else {
                                print_filters(controller.filters());
                            }
                            println!();
                        }
                        Some(SearchCommand::Exit) => {
                            println!("\n  {}", style("Happy travels.").dim());
                            break;
                        }
                        Some(SearchCommand::Unknown(name)) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                        // Free text (including empty) runs a new search.
                        None => {
                            if text.is_empty() {
                                // Empty box: the rotation resumes.
                                rotating = true;
                            } else {
                                // Typing stops and resets the rotation.
                                rotating = false;
                                rotation.reset();
                                input.update_prompt(&prompt_with(rotation.current()));
                            }
                            expanded.clear();
                            issue_search(&mut controller, &mut in_flight, state, &text);
                            if spinner.is_none() {
                                spinner = Some(start_spinner());
                            }
                        }
                    }
                }
            },
            Some((seq, result)) = in_flight.next(), if !in_flight.is_empty() => {
                let applied = match result {
                    Ok(reply) => controller.apply_reply(seq, reply),
                    Err(error) => controller.apply_failure(seq, &error),
                };
                if applied {
                    if !controller.is_loading() {
                        if let Some(pb) = spinner.take() {
                            pb.finish_and_clear();
                        }
                    }
                    print_results(&controller, &expanded);
                }
            },
            Some(()) = tick_rx.recv() => {
                if rotating {
                    rotation.advance();
                    input.update_prompt(&prompt_with(rotation.current()));
                }
            }
        }
    }

    // The view is no longer active: tear the rotation timer down.
    cancel.cancel();
    let _ = rotation_task.await;

    Ok(())
}

/// Begin a search on the controller and push the request into the in-flight
/// set, tagged with its sequence number.
fn issue_search(
    controller: &mut SearchController,
    in_flight: &mut InFlight,
    state: &AppState,
    raw_query: &str,
) {
    let request = controller.begin_search(raw_query);
    let backend = state.search_backend.clone();
    in_flight.push(Box::pin(async move {
        let result = backend.search(&request.query).await;
        (request.seq, result)
    }));
}

/// Whether a 1-based card number is on the currently displayed page.
fn card_on_page(controller: &SearchController, number: usize) -> bool {
    let start = controller.page_offset() + 1;
    let end = controller.page_offset() + controller.page_listings().len();
    (start..=end).contains(&number)
}

fn prompt_with(suggestion: &str) -> String {
    format!(
        "  {} {} ",
        style("search >").green().bold(),
        style(format!("(try: {suggestion})")).dim()
    )
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("searching listings...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Tick on the fixed rotation interval until cancelled.
async fn run_rotation_timer(cancel: CancellationToken, tx: mpsc::Sender<()>) {
    let mut interval = tokio::time::interval(ROTATION_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first tick completes immediately; swallow it so the placeholder
    // holds for a full interval before advancing.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        }
    }
}
