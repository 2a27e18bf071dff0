//! Printing of search results: cards, filter chips, pagination footer.

use std::collections::HashSet;

use console::style;

use wayfarer_core::render::build_card;
use wayfarer_core::search::SearchController;

/// Print the banner at the top of the search view.
pub fn print_banner(backend_url: &str) {
    println!();
    println!(
        "  {} {}",
        style("*").green().bold(),
        style("Vacation Rental Explorer").green().bold()
    );
    println!(
        "  {}",
        style("Sort through vacation rentals with natural language.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Backend:").bold(),
        style(backend_url).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type a query to search, /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the current page of results.
///
/// `expanded` holds the 1-based display numbers of cards whose description
/// toggle is currently on.
pub fn print_results(controller: &SearchController, expanded: &HashSet<usize>) {
    println!();

    if let Some(message) = controller.error_message() {
        println!("  {} {}", style("!").yellow().bold(), style(message).yellow());
        println!();
    }

    if !controller.filters().is_empty() {
        print_filters(controller.filters());
        println!();
    }

    if controller.page_listings().is_empty() {
        println!(
            "  {}",
            style("No listings matched this search").bold()
        );
        println!(
            "  {}",
            style("Try relaxing one constraint (price, rooms, or amenities) and search again.")
                .dim()
        );
        println!();
        return;
    }

    let offset = controller.page_offset();
    for (i, listing) in controller.page_listings().iter().enumerate() {
        let number = offset + i + 1;
        let card = build_card(listing, expanded.contains(&number));

        println!(
            "  {} {}  {}",
            style(format!("{number}.")).bold(),
            style(&card.title).cyan().bold(),
            style(format!("${}", card.price_display)).green().bold()
        );
        if let Some(location) = &card.location_line {
            println!("     {}", style(location).dim());
        }

        let stats = card
            .stats
            .iter()
            .map(|stat| format!("{} {}", style(stat.label).dim(), stat.value))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", style("|").dim()));
        println!("     {stats}");

        println!("     {}", card.description);
        if card.has_long_description {
            let hint = if card.expanded {
                format!("/collapse {number} to shrink")
            } else {
                format!("/expand {number} to read more")
            };
            println!("     {}", style(hint).dim());
        }
        if let Some(url) = &card.listing_url {
            println!("     {}", style(url).underlined().dim());
        }
        println!();
    }

    print_pagination(controller);
    println!();
}

/// Print the applied filter chips on one line.
pub fn print_filters(filters: &[String]) {
    let chips = filters
        .iter()
        .map(|f| format!("{}", style(format!("[{f}]")).green()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}  {}", style("Filters:").bold(), chips);
}

/// Print the pagination footer with Previous/Next availability.
fn print_pagination(controller: &SearchController) {
    let total = controller.listings().len();
    let pages = controller.total_pages();
    if pages <= 1 {
        println!(
            "  {}",
            style(format!(
                "{total} listing{}",
                if total == 1 { "" } else { "s" }
            ))
            .dim()
        );
        return;
    }

    let prev = if controller.has_prev() {
        format!("{}", style("/prev").cyan())
    } else {
        format!("{}", style("/prev").dim())
    };
    let next = if controller.has_next() {
        format!("{}", style("/next").cyan())
    } else {
        format!("{}", style("/next").dim())
    };

    println!(
        "  {} {}  {}  {}",
        style(format!("Page {} of {pages}", controller.current_page())).bold(),
        style(format!("({total} listings)")).dim(),
        prev,
        next
    );
}
