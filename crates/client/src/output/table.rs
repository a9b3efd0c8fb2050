//! Two-column key/value table output.

use comfy_table::{presets::NOTHING, Attribute, Cell, Table};
use strava_core::activity::ActivityRow;

/// Render rows as a borderless, headerless, left-aligned table.
///
/// Labels are bold when `styled` is set. Multi-line values stay in the value
/// column.
pub fn format_rows(rows: &[ActivityRow], styled: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label).add_attribute(Attribute::Bold),
            Cell::new(&row.value),
        ]);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 1));
    }

    table.trim_fmt()
}
