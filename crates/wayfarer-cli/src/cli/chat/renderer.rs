//! Terminal rendering of transcript messages.
//!
//! `ChatRenderer` turns the pure display models from `wayfarer-core` into
//! printable blocks: termimad for assistant prose, comfy-table for tabular
//! replies, styled lines for user bubbles and image references.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use termimad::MadSkin;

use wayfarer_core::render::message::{MessageDisplay, TableDisplay};

/// Background used for the shaded (even-index) table rows.
const SHADED_ROW_BG: Color = Color::AnsiValue(236);

/// Terminal renderer for the chat view.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    /// Render a message display model to a printable block.
    ///
    /// Returns `None` for displays that render nothing.
    pub fn render(&self, display: &MessageDisplay) -> Option<String> {
        match display {
            MessageDisplay::UserBubble(content) => Some(format!(
                "  {} {}",
                style("You >").green().bold(),
                content
            )),
            MessageDisplay::AssistantText(content) => {
                let rendered = self.skin.term_text(content);
                Some(format!(
                    "  {} {}",
                    style("Wayfarer").cyan().bold(),
                    format!("{rendered}").trim_end()
                ))
            }
            MessageDisplay::Table(table) => Some(format!(
                "  {}\n{}",
                style("Wayfarer").cyan().bold(),
                render_table(table)
            )),
            MessageDisplay::Image(reference) => Some(format!(
                "  {} {} {}",
                style("Wayfarer").cyan().bold(),
                style("[image]").magenta(),
                style(reference).underlined()
            )),
            MessageDisplay::EmptyTable => Some(format!(
                "  {} {}",
                style("Wayfarer").cyan().bold(),
                style("(no rows to display)").dim()
            )),
            MessageDisplay::Nothing => None,
        }
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a table display with comfy-table: header from the display model,
/// even-index rows shaded.
fn render_table(table: &TableDisplay) -> String {
    let mut out = Table::new();
    out.load_preset(presets::UTF8_FULL_CONDENSED);
    out.set_content_arrangement(ContentArrangement::Dynamic);

    out.set_header(
        table
            .header
            .iter()
            .map(|h| Cell::new(h).fg(Color::White))
            .collect::<Vec<_>>(),
    );

    for row in &table.rows {
        let cells: Vec<Cell> = row
            .cells
            .iter()
            .map(|cell| {
                if row.shaded {
                    Cell::new(cell).bg(SHADED_ROW_BG)
                } else {
                    Cell::new(cell)
                }
            })
            .collect();
        out.add_row(cells);
    }

    format!("{out}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::render::display_message;
    use wayfarer_types::message::Message;

    #[test]
    fn test_unknown_renders_none() {
        let renderer = ChatRenderer::new();
        assert!(renderer.render(&MessageDisplay::Nothing).is_none());
        assert!(renderer
            .render(&display_message(&Message::Unknown))
            .is_none());
    }

    #[test]
    fn test_user_bubble_contains_content() {
        let renderer = ChatRenderer::new();
        let rendered = renderer
            .render(&display_message(&Message::user("find me a room")))
            .unwrap();
        assert!(rendered.contains("find me a room"));
    }

    #[test]
    fn test_table_renders_header_and_rows() {
        let renderer = ChatRenderer::new();
        let message: Message = serde_json::from_str(
            r#"{"type":"table","content":[{"name":"A","price":100},{"name":"B","price":200}]}"#,
        )
        .unwrap();
        let rendered = renderer.render(&display_message(&message)).unwrap();
        assert!(rendered.contains("name"));
        assert!(rendered.contains("price"));
        assert!(rendered.contains("A"));
        assert!(rendered.contains("200"));
    }

    #[test]
    fn test_empty_table_renders_empty_state() {
        let renderer = ChatRenderer::new();
        let rendered = renderer
            .render(&display_message(&Message::Table(Vec::new())))
            .unwrap();
        assert!(rendered.contains("no rows"));
    }
}
