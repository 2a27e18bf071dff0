//! Welcome banner and empty-transcript welcome screen for the chat view.

use console::style;

/// Sample queries offered when the transcript is empty.
pub const SAMPLE_QUERIES: [&str; 3] = [
    "Show me a table of the ten cheapest rentals",
    "What is the average nightly price across all listings?",
    "Plot the distribution of review scores",
];

/// Print the banner at the top of the chat view.
pub fn print_welcome_banner(session_id: &str, backend_url: &str) {
    println!();
    println!(
        "  {} {}",
        style("*").cyan().bold(),
        style("Wayfarer").cyan().bold()
    );
    println!(
        "  {}",
        style("Travel assistant with access to current rental listings.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Backend:").bold(),
        style(backend_url).dim()
    );
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the welcome screen shown while the transcript is empty:
/// a short pitch plus sample queries to get started.
pub fn print_welcome_screen() {
    println!(
        "  {}",
        style("Ask anything about the listings. Some ideas:").bold()
    );
    println!();
    for sample in SAMPLE_QUERIES {
        println!("  {} {}", style(">").cyan(), style(sample).dim());
    }
    println!();
}
