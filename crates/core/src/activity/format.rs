//! Activity to table-row transformation.
//!
//! Rows are produced in a single pass over the response: every top-level field
//! in source order, then one row per metric split.

use serde_json::Value;

use super::fields::FieldKind;
use super::units::{
    format_date, format_distance, format_elevation, format_heartrate, format_seconds,
    format_speed, FormatOptions,
};
use super::Activity;

const ACTIVITY_URL: &str = "https://www.strava.com/activities";
const SPLITS_FIELD: &str = "splits_metric";
const DESCRIPTION_FIELD: &str = "description";

const RUNNING_SHOE: &str = "👟";
const RED_HEART: &str = "❤";
const UP_ARROW: &str = "⬆";
const DOWN_ARROW: &str = "⬇";
const RIGHT_ARROW: &str = "➡";

/// A single key/value line of the activity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub label: String,
    pub value: String,
}

impl ActivityRow {
    fn new(field: &str, value: String) -> Self {
        Self {
            label: format!("{}:", humanize(field)),
            value,
        }
    }
}

/// Build the table rows for an activity.
///
/// The description is folded into the name row when both are present, and
/// `splits_metric` is expanded into `Split N` rows after the base fields.
pub fn activity_rows(activity: &Activity, options: &FormatOptions) -> Vec<ActivityRow> {
    let description_merged = activity.contains_key("name");

    let base = activity
        .iter()
        .filter(|(field, _)| field.as_str() != SPLITS_FIELD)
        .filter(|(field, _)| !(description_merged && field.as_str() == DESCRIPTION_FIELD))
        .map(|(field, value)| {
            let kind = FieldKind::for_field(field);
            ActivityRow::new(field, format_field(kind, value, activity, options))
        });

    let splits = activity
        .get(SPLITS_FIELD)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, split)| {
            let number = split
                .get("split")
                .map(passthrough)
                .unwrap_or_else(|| (index + 1).to_string());
            ActivityRow::new(&format!("Split {number}"), format_split(split, options))
        });

    base.chain(splits).collect()
}

/// Render one field value according to its kind.
///
/// Values that do not have the expected shape fall back to [`passthrough`].
pub fn format_field(
    kind: FieldKind,
    value: &Value,
    activity: &Activity,
    options: &FormatOptions,
) -> String {
    let formatted = match kind {
        FieldKind::Name => value.as_str().map(|name| format_name(name, activity)),
        FieldKind::Date => value.as_str().and_then(format_date),
        FieldKind::Duration => value
            .as_f64()
            .filter(|seconds| *seconds >= 0.0)
            .map(|seconds| format_seconds(seconds.round() as u64)),
        FieldKind::Distance => value.as_f64().map(|meters| format_distance(meters, options)),
        FieldKind::Speed => value.as_f64().map(|speed| format_speed(speed, options)),
        FieldKind::HeartRate => value.as_f64().map(format_heartrate),
        FieldKind::Elevation => value
            .as_f64()
            .map(|meters| format_elevation(meters, options)),
        FieldKind::Gear => value.as_object().map(|gear| {
            let name = gear.get("name").map(passthrough).unwrap_or_default();
            let distance = gear.get("distance").and_then(Value::as_f64).unwrap_or(0.0);
            format!("{name} ({})", format_distance(distance, options))
        }),
        FieldKind::Passthrough => None,
    };

    formatted.unwrap_or_else(|| passthrough(value))
}

/// Render a split as `👟 speed ❤ heart rate ⬆ elevation`, skipping missing metrics.
pub fn format_split(split: &Value, options: &FormatOptions) -> String {
    let Some(split) = split.as_object() else {
        return passthrough(split);
    };

    let speed = split
        .get("average_speed")
        .and_then(Value::as_f64)
        .map(|speed| format!("{RUNNING_SHOE} {}", format_speed(speed, options)));
    let heartrate = split
        .get("average_heartrate")
        .and_then(Value::as_f64)
        .map(|bpm| format!("{RED_HEART} {}", format_heartrate(bpm)));
    let elevation = split
        .get("elevation_difference")
        .and_then(Value::as_f64)
        .map(|difference| {
            let arrow = match difference.round() {
                d if d > 0.0 => UP_ARROW,
                d if d < 0.0 => DOWN_ARROW,
                _ => RIGHT_ARROW,
            };
            format!("{arrow} {}", format_elevation(difference.abs(), options))
        });

    [speed, heartrate, elevation]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn a field name into a label: `average_speed` becomes `Average speed`.
pub fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a JSON value as-is. Strings lose their quotes and `null` is empty.
pub fn passthrough(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_name(name: &str, activity: &Activity) -> String {
    let title = match activity.get("id").filter(|id| !id.is_null()) {
        Some(id) => format!("{name} ({ACTIVITY_URL}/{})", passthrough(id)),
        None => name.to_string(),
    };

    match activity.get(DESCRIPTION_FIELD).and_then(Value::as_str) {
        Some(description) if !description.is_empty() => format!("{title}\n{description}"),
        _ => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::UnitSystem;
    use serde_json::json;

    fn activity(value: Value) -> Activity {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn sample() -> Activity {
        activity(json!({
            "id": 12345,
            "name": "Morning Run",
            "description": "Easy pace",
            "distance": 12345.6,
            "moving_time": 3723,
            "kudos_count": 4,
            "average_speed": 3.3333333333333335,
            "total_elevation_gain": 123.0,
            "splits_metric": [
                {"split": 1, "average_speed": 3.3333333333333335, "average_heartrate": 150.2, "elevation_difference": 4.6},
                {"split": 2, "average_speed": 3.3333333333333335, "elevation_difference": -0.2}
            ]
        }))
    }

    fn labels(rows: &[ActivityRow]) -> Vec<&str> {
        rows.iter().map(|row| row.label.as_str()).collect()
    }

    #[test]
    fn rows_follow_source_order_then_splits() {
        let rows = activity_rows(&sample(), &FormatOptions::default());
        assert_eq!(
            labels(&rows),
            vec![
                "Id:",
                "Name:",
                "Distance:",
                "Moving time:",
                "Kudos count:",
                "Average speed:",
                "Total elevation gain:",
                "Split 1:",
                "Split 2:",
            ]
        );
    }

    #[test]
    fn name_row_carries_link_and_description() {
        let rows = activity_rows(&sample(), &FormatOptions::default());
        assert_eq!(
            rows[1].value,
            "Morning Run (https://www.strava.com/activities/12345)\nEasy pace"
        );
    }

    #[test]
    fn description_stays_when_there_is_no_name() {
        let rows = activity_rows(
            &activity(json!({"description": "Solo"})),
            &FormatOptions::default(),
        );
        assert_eq!(rows, vec![ActivityRow::new("description", "Solo".into())]);
    }

    #[test]
    fn formatted_fields_hide_raw_values() {
        let rows = activity_rows(&sample(), &FormatOptions::default());
        let distance = &rows[2].value;
        let moving_time = &rows[3].value;
        assert_eq!(distance, "12.35 km");
        assert!(!distance.contains("12345.6"));
        assert_eq!(moving_time, "1h 02m 03s");
        assert!(!moving_time.contains("3723"));
    }

    #[test]
    fn unknown_fields_pass_through() {
        let rows = activity_rows(&sample(), &FormatOptions::default());
        assert_eq!(rows[4].value, "4");
    }

    #[test]
    fn imperial_units_convert_distance_speed_and_elevation() {
        let options = FormatOptions::new(UnitSystem::Imperial);
        let rows = activity_rows(&sample(), &options);
        assert_eq!(rows[2].value, "7.67 mi");
        assert_eq!(rows[5].value, "7.5 mph (8:03 /mi)");
        assert_eq!(rows[6].value, "404 ft");
    }

    #[test]
    fn formatting_is_idempotent() {
        let input = sample();
        let options = FormatOptions::new(UnitSystem::Imperial);
        assert_eq!(
            activity_rows(&input, &options),
            activity_rows(&input, &options)
        );
    }

    #[test]
    fn splits_render_speed_heartrate_and_elevation() {
        let rows = activity_rows(&sample(), &FormatOptions::default());
        assert_eq!(rows[7].value, "👟 12.0 km/h (5:00 /km) ❤ 150 bpm ⬆ 5 m");
        assert_eq!(rows[8].value, "👟 12.0 km/h (5:00 /km) ➡ 0 m");
    }

    #[test]
    fn negative_elevation_points_down_and_shows_magnitude() {
        let split = json!({"elevation_difference": -7.4});
        assert_eq!(format_split(&split, &FormatOptions::default()), "⬇ 7 m");
    }

    #[test]
    fn split_without_heartrate_joins_remaining_metrics() {
        let split = json!({"average_speed": 3, "elevation_difference": 2});
        assert_eq!(
            format_split(&split, &FormatOptions::default()),
            "👟 10.8 km/h (5:33 /km) ⬆ 2 m"
        );
    }

    #[test]
    fn split_without_number_uses_position() {
        let rows = activity_rows(
            &activity(json!({"splits_metric": [{"average_heartrate": 140}]})),
            &FormatOptions::default(),
        );
        assert_eq!(labels(&rows), vec!["Split 1:"]);
        assert_eq!(rows[0].value, "❤ 140 bpm");
    }

    #[test]
    fn gear_shows_name_and_distance() {
        let input = activity(json!({"gear": {"name": "Pegasus", "distance": 432100.0}}));
        let rows = activity_rows(&input, &FormatOptions::default());
        assert_eq!(rows[0].value, "Pegasus (432.10 km)");
    }

    #[test]
    fn malformed_known_fields_fall_back_to_passthrough() {
        let input = activity(json!({"distance": "far", "start_date": "soon", "gear": null}));
        let rows = activity_rows(&input, &FormatOptions::default());
        assert_eq!(rows[0].value, "far");
        assert_eq!(rows[1].value, "soon");
        assert_eq!(rows[2].value, "");
    }

    #[test]
    fn dates_are_humanized() {
        let input = activity(json!({"start_date": "2024-01-01T08:00:00Z"}));
        let rows = activity_rows(&input, &FormatOptions::default());
        assert_eq!(rows[0].label, "Start date:");
        assert_eq!(rows[0].value, "Mon, Jan 01 2024 08:00");
    }

    #[test]
    fn nested_unknown_values_render_as_compact_json() {
        assert_eq!(passthrough(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
        assert_eq!(passthrough(&json!(true)), "true");
        assert_eq!(passthrough(&Value::Null), "");
    }

    #[test]
    fn humanize_capitalizes_first_word_only() {
        assert_eq!(humanize("average_speed"), "Average speed");
        assert_eq!(humanize("Split 3"), "Split 3");
        assert_eq!(humanize(""), "");
    }
}
