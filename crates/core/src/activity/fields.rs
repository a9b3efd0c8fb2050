/// How a top-level activity field is rendered in table output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Activity name, merged with the description and a link to the activity.
    Name,
    /// RFC 3339 timestamp.
    Date,
    /// Duration in seconds.
    Duration,
    /// Distance in meters.
    Distance,
    /// Speed in meters per second.
    Speed,
    /// Heart rate in beats per minute.
    HeartRate,
    /// Elevation in meters.
    Elevation,
    /// Gear summary object with `name` and `distance`.
    Gear,
    /// Rendered as received.
    Passthrough,
}

/// Fields with a dedicated rendering strategy. Anything else is passed through.
const FIELD_KINDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::Name),
    ("start_date", FieldKind::Date),
    ("start_date_local", FieldKind::Date),
    ("moving_time", FieldKind::Duration),
    ("elapsed_time", FieldKind::Duration),
    ("distance", FieldKind::Distance),
    ("average_speed", FieldKind::Speed),
    ("max_speed", FieldKind::Speed),
    ("average_heartrate", FieldKind::HeartRate),
    ("max_heartrate", FieldKind::HeartRate),
    ("total_elevation_gain", FieldKind::Elevation),
    ("calories", FieldKind::Passthrough),
    ("device_name", FieldKind::Passthrough),
    ("gear", FieldKind::Gear),
];

impl FieldKind {
    /// Look up the rendering strategy for a field name.
    pub fn for_field(name: &str) -> Self {
        FIELD_KINDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(FieldKind::Passthrough)
    }
}
