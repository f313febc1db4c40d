//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// One extracted variable.
#[derive(Debug, Serialize)]
pub struct VarRow {
    /// Placeholder key (e.g., "_gt_1").
    pub key: String,
    /// The variable's text.
    pub value: String,
    /// Translator-facing name, if the placeholder declared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Format extracted variables as an ASCII table.
pub fn format_vars_table(rows: &[VarRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Value", "Name"]);

    for row in rows {
        table.add_row(vec![
            row.key.clone(),
            row.value.clone(),
            row.name.clone().unwrap_or_default(),
        ]);
    }

    table
}
