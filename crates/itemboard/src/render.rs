//! Terminal presentation of the published display state

use crate::prelude::*;
use colored::Colorize;
use itemboard_core::record::Record;
use itemboard_core::state::{DisplayState, View};
use itemboard_core::transform::{display_rows, group_records, DisplayRow};

/// Convert the display state to a JSON string
pub fn format_state_json(state: &DisplayState) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render records grouped under `List ID` headers
pub fn format_grouped_text(items: &[Record]) -> String {
    let mut result = String::new();

    if items.is_empty() {
        result.push_str(&f!("\n{}\n", "No items to display.".yellow()));
        return result;
    }

    for row in display_rows(&group_records(items)) {
        match row {
            DisplayRow::Header { group_id } => {
                result.push_str(&f!("\n{}\n", "-".repeat(40).bright_black()));
                result.push_str(&f!(
                    "{}\n",
                    f!("List ID: {group_id}").bright_green().bold()
                ));
                result.push_str(&f!("{}\n", "-".repeat(40).bright_black()));
            }
            DisplayRow::Entry(record) => {
                result.push_str(&f!(
                    "  {} {}\n",
                    record.display_name().green(),
                    f!("(id {})", record.id).bright_black()
                ));
            }
        }
    }

    result
}

/// Render records in their published order as a table
pub fn format_flat_table(items: &[Record]) -> String {
    let mut table = new_table();
    table.set_titles(prettytable::row!["ID", "LIST ID", "NAME"]);

    for record in items {
        table.add_row(prettytable::row![
            record.id,
            record.group_id,
            record.display_name()
        ]);
    }

    table.to_string()
}

/// Render whatever the state calls for: loading indicator, error or list
pub fn format_state_text(state: &DisplayState, flat: bool) -> String {
    match state.view() {
        View::Idle => f!("{}\n", "Nothing loaded yet.".bright_black()),
        View::Loading => f!("{}\n", "Loading...".bright_cyan()),
        View::Failed(error) => f!("{} {}\n", "Error:".red().bold(), error.red()),
        View::Loaded(items) if flat => format_flat_table(items),
        View::Loaded(items) => format_grouped_text(items),
    }
}
