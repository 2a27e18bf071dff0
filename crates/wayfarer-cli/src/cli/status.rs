//! `wayf status` -- configuration and saved-session summary.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// Show the resolved configuration and what the local store holds.
pub async fn status(state: &AppState, json: bool) -> anyhow::Result<()> {
    let saved = state.session_store.load().await?;

    if json {
        let summary = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "chat_base_url": state.config.backend.chat_base_url,
            "search_base_url": state.config.backend.search_base_url,
            "session_id": saved.session_id,
            "saved_messages": saved.transcript.len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Data dir").fg(Color::White),
        Cell::new(state.data_dir.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Chat backend").fg(Color::White),
        Cell::new(&state.config.backend.chat_base_url),
    ]);
    table.add_row(vec![
        Cell::new("Search backend").fg(Color::White),
        Cell::new(&state.config.backend.search_base_url),
    ]);
    table.add_row(vec![
        Cell::new("Session").fg(Color::White),
        match &saved.session_id {
            Some(id) => Cell::new(id).fg(Color::Cyan),
            None => Cell::new("(none)").fg(Color::DarkGrey),
        },
    ]);
    table.add_row(vec![
        Cell::new("Saved messages").fg(Color::White),
        Cell::new(saved.transcript.len().to_string()),
    ]);

    println!();
    println!("  {}", style("Wayfarer status").cyan().bold());
    println!();
    println!("{table}");
    println!();

    Ok(())
}
