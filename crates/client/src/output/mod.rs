//! Output formatting functions.

pub mod json;
pub mod table;

use std::io::IsTerminal;

use strava_core::activity::{activity_rows, Activity, FormatOptions};

use crate::cli::OutputFormat;

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    pub format: OutputFormat,
    pub options: FormatOptions,
    /// Emit ANSI styling in tables.
    pub styled: bool,
}

impl OutputCtx {
    /// Construct from CLI args, styling only when stdout is a terminal.
    pub fn new(format: OutputFormat, imperial_units: bool) -> Self {
        Self {
            format,
            options: FormatOptions::from_imperial_flag(imperial_units),
            styled: std::io::stdout().is_terminal(),
        }
    }

    /// Render an activity in the requested format.
    ///
    /// JSON output is the decoded response as received; the formatting
    /// options only affect the table.
    pub fn render_activity(&self, activity: &Activity) -> String {
        match self.format {
            OutputFormat::Json => json::format_json(activity),
            OutputFormat::Table => {
                table::format_rows(&activity_rows(activity, &self.options), self.styled)
            }
        }
    }
}
