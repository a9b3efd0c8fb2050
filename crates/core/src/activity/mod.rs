mod dates;
mod error;
mod fields;
mod format;
mod requests;
mod sport;
mod units;

pub use dates::parse_start_date;
pub use error::ActivityError;
pub use fields::FieldKind;
pub use format::{activity_rows, format_field, format_split, humanize, passthrough, ActivityRow};
pub use requests::{
    elapsed_minutes_to_seconds, ActivityType, CreateActivityRequest, DEFAULT_DESCRIPTION,
};
pub use sport::SportType;
pub use units::{
    format_date, format_distance, format_elevation, format_heartrate, format_seconds,
    format_speed, FormatOptions, UnitSystem,
};

/// An activity as returned by the remote API.
///
/// Kept as an ordered JSON object so unknown fields survive untouched and the
/// response order drives the table layout.
pub type Activity = serde_json::Map<String, serde_json::Value>;
