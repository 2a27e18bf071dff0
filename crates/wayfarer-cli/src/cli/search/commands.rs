//! Slash command parsing for the search view.
//!
//! Free text runs a new search; slash commands drive pagination and the
//! per-card description toggles.

use console::style;

/// Available slash commands in the search view.
#[derive(Debug, PartialEq)]
pub enum SearchCommand {
    /// Show available commands.
    Help,
    /// Go to the next page.
    Next,
    /// Go to the previous page.
    Prev,
    /// Jump to a specific page (1-based).
    Page(usize),
    /// Expand the description of a card (by its displayed number).
    Expand(usize),
    /// Collapse the description of a card.
    Collapse(usize),
    /// Show the current filter chips.
    Filters,
    /// Clear the terminal screen.
    Clear,
    /// Exit the search view.
    Exit,
    /// Unknown or malformed command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/` (free text is a
/// search query, including the empty string).
pub fn parse(input: &str) -> Option<SearchCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or(trimmed).to_lowercase();
    let arg = parts.next();

    let parse_number = |name: &str, arg: Option<&str>| -> Result<usize, SearchCommand> {
        arg.and_then(|a| a.parse::<usize>().ok())
            .filter(|n| *n >= 1)
            .ok_or_else(|| SearchCommand::Unknown(format!("{name} needs a number")))
    };

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(SearchCommand::Help),
        "/next" | "/n" => Some(SearchCommand::Next),
        "/prev" | "/p" | "/previous" => Some(SearchCommand::Prev),
        "/page" => Some(match parse_number("/page", arg) {
            Ok(n) => SearchCommand::Page(n),
            Err(e) => e,
        }),
        "/expand" | "/more" => Some(match parse_number("/expand", arg) {
            Ok(n) => SearchCommand::Expand(n),
            Err(e) => e,
        }),
        "/collapse" | "/less" => Some(match parse_number("/collapse", arg) {
            Ok(n) => SearchCommand::Collapse(n),
            Err(e) => e,
        }),
        "/filters" => Some(SearchCommand::Filters),
        "/clear" | "/cls" => Some(SearchCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(SearchCommand::Exit),
        other => Some(SearchCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Type a query to search, or:").bold());
    println!();
    println!("  {}      {}", style("/next").cyan(), "Next page of results");
    println!("  {}      {}", style("/prev").cyan(), "Previous page of results");
    println!("  {}    {}", style("/page N").cyan(), "Jump to page N");
    println!("  {}  {}", style("/expand N").cyan(), "Read a card's full description");
    println!("  {} {}", style("/collapse N").cyan(), "Shrink it back down");
    println!("  {}   {}", style("/filters").cyan(), "Show the applied filters");
    println!("  {}     {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}      {}", style("/exit").cyan(), "Leave the search view");
    println!();
    println!(
        "  {}",
        style("An empty query reloads the full listing set.").dim()
    );
    println!();
}
