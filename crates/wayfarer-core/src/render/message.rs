//! Pure mapping from a transcript message to its display form.

use wayfarer_types::message::{Message, TableRecord};

use super::format::value_to_cell;

/// A rendered table: header row plus body rows in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDisplay {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// One body row, classified shaded/unshaded by index parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub shaded: bool,
}

/// Display form of a transcript message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageDisplay {
    /// The user's own input, rendered as a distinguished bubble.
    UserBubble(String),
    /// Assistant prose, rendered with the assistant attribution.
    AssistantText(String),
    Table(TableDisplay),
    /// An image reference rendered directly.
    Image(String),
    /// A `table` message with no rows: degrade to an explicit empty state
    /// instead of failing on the missing first record.
    EmptyTable,
    /// Unrecognized message tags render nothing.
    Nothing,
}

/// Map a message to its display form.
///
/// The table header derives from the first record's keys in input order;
/// body cells come from each record's own value order (uniform shape is
/// assumed, not validated).
pub fn display_message(message: &Message) -> MessageDisplay {
    match message {
        Message::User(content) => MessageDisplay::UserBubble(content.clone()),
        Message::Text(content) => MessageDisplay::AssistantText(content.clone()),
        Message::Table(records) => display_table(records),
        Message::Plot(reference) => MessageDisplay::Image(reference.clone()),
        Message::Unknown => MessageDisplay::Nothing,
    }
}

fn display_table(records: &[TableRecord]) -> MessageDisplay {
    let Some(first) = records.first() else {
        return MessageDisplay::EmptyTable;
    };

    let header: Vec<String> = first.keys().cloned().collect();
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| TableRow {
            cells: record.values().map(value_to_cell).collect(),
            shaded: index % 2 == 0,
        })
        .collect();

    MessageDisplay::Table(TableDisplay { header, rows })
}
