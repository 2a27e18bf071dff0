//! `wayf reset` -- clear the saved conversation.

use console::style;
use dialoguer::Confirm;

use crate::state::AppState;

/// Delete the saved session identifier and transcript, with confirmation.
pub async fn reset_session(state: &AppState, force: bool, json: bool) -> anyhow::Result<()> {
    let saved = state.session_store.load().await?;

    if saved.session_id.is_none() && saved.transcript.is_empty() {
        if json {
            println!("{}", serde_json::json!({"deleted": false, "reason": "nothing saved"}));
        } else {
            println!("  {}", style("Nothing saved to clear.").dim());
        }
        return Ok(());
    }

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Clear the saved conversation ({} message{})?",
                saved.transcript.len(),
                if saved.transcript.len() == 1 { "" } else { "s" }
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.session_store.clear().await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true}));
    } else {
        println!(
            "  {} Conversation cleared. The next chat starts a fresh session.",
            style("x").red().bold()
        );
    }

    Ok(())
}
