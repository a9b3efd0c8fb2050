//! Unit conversions and scalar formatting.
//!
//! The API always reports SI values (meters, meters per second, seconds).
//! Conversion happens only at render time, driven by [`FormatOptions`].

use chrono::DateTime;

const METERS_PER_KILOMETER: f64 = 1_000.0;
const METERS_PER_MILE: f64 = 1_609.344;
const FEET_PER_METER: f64 = 3.280_84;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Measurement system used when rendering distances, speeds and elevations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Options threaded through every formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub units: UnitSystem,
}

impl FormatOptions {
    /// Options for the given unit system.
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// Metric when `imperial` is false, imperial otherwise.
    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial {
            Self::new(UnitSystem::Imperial)
        } else {
            Self::new(UnitSystem::Metric)
        }
    }
}

/// Format a distance given in meters.
pub fn format_distance(meters: f64, options: &FormatOptions) -> String {
    match options.units {
        UnitSystem::Metric => format!("{:.2} km", meters / METERS_PER_KILOMETER),
        UnitSystem::Imperial => format!("{:.2} mi", meters / METERS_PER_MILE),
    }
}

/// Format a speed given in meters per second, followed by the matching pace.
pub fn format_speed(meters_per_second: f64, options: &FormatOptions) -> String {
    let (unit_meters, speed_unit, pace_unit) = match options.units {
        UnitSystem::Metric => (METERS_PER_KILOMETER, "km/h", "/km"),
        UnitSystem::Imperial => (METERS_PER_MILE, "mph", "/mi"),
    };
    let speed = meters_per_second * SECONDS_PER_HOUR / unit_meters;

    if meters_per_second <= 0.0 || !meters_per_second.is_finite() {
        return format!("{:.1} {}", speed.max(0.0), speed_unit);
    }

    let pace = format_pace((unit_meters / meters_per_second).round() as u64);
    format!("{speed:.1} {speed_unit} ({pace} {pace_unit})")
}

/// Format an elevation given in meters.
pub fn format_elevation(meters: f64, options: &FormatOptions) -> String {
    match options.units {
        UnitSystem::Metric => format!("{meters:.0} m"),
        UnitSystem::Imperial => format!("{:.0} ft", meters * FEET_PER_METER),
    }
}

/// Format a heart rate in beats per minute.
pub fn format_heartrate(bpm: f64) -> String {
    format!("{bpm:.0} bpm")
}

/// Format a duration in seconds as `1h 02m 03s`, `45m 03s` or `42s`.
pub fn format_seconds(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {secs:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}

/// Format an RFC 3339 timestamp as `Mon, Jan 01 2024 08:00`.
///
/// Returns `None` when the input is not a valid timestamp.
pub fn format_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.format("%a, %b %d %Y %H:%M").to_string())
}

fn format_pace(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRIC: FormatOptions = FormatOptions {
        units: UnitSystem::Metric,
    };
    const IMPERIAL: FormatOptions = FormatOptions {
        units: UnitSystem::Imperial,
    };

    #[test]
    fn default_options_are_metric() {
        assert_eq!(FormatOptions::default(), METRIC);
        assert_eq!(FormatOptions::from_imperial_flag(false), METRIC);
        assert_eq!(FormatOptions::from_imperial_flag(true), IMPERIAL);
    }

    #[test]
    fn distance_metric_and_imperial() {
        assert_eq!(format_distance(12_345.6, &METRIC), "12.35 km");
        assert_eq!(format_distance(12_345.6, &IMPERIAL), "7.67 mi");
        assert_eq!(format_distance(0.0, &METRIC), "0.00 km");
    }

    #[test]
    fn speed_includes_pace() {
        assert_eq!(format_speed(10.0 / 3.0, &METRIC), "12.0 km/h (5:00 /km)");
        assert_eq!(format_speed(10.0 / 3.0, &IMPERIAL), "7.5 mph (8:03 /mi)");
    }

    #[test]
    fn pace_never_shows_sixty_seconds() {
        // 1000 / 3.3445 = 298.998..., rounds to 299 seconds
        assert_eq!(format_speed(3.3445, &METRIC), "12.0 km/h (4:59 /km)");
        // 1000 / 3.33389 = 299.95..., rounds to a full 5 minutes
        assert_eq!(format_speed(3.33389, &METRIC), "12.0 km/h (5:00 /km)");
    }

    #[test]
    fn zero_speed_has_no_pace() {
        assert_eq!(format_speed(0.0, &METRIC), "0.0 km/h");
        assert_eq!(format_speed(0.0, &IMPERIAL), "0.0 mph");
    }

    #[test]
    fn elevation_metric_and_imperial() {
        assert_eq!(format_elevation(123.0, &METRIC), "123 m");
        assert_eq!(format_elevation(123.0, &IMPERIAL), "404 ft");
    }

    #[test]
    fn heartrate_is_rounded() {
        assert_eq!(format_heartrate(149.6), "150 bpm");
        assert_eq!(format_heartrate(150.0), "150 bpm");
    }

    #[test]
    fn seconds_are_humanized() {
        assert_eq!(format_seconds(42), "42s");
        assert_eq!(format_seconds(2_703), "45m 03s");
        assert_eq!(format_seconds(3_723), "1h 02m 03s");
        assert_eq!(format_seconds(3_600), "1h 00m 00s");
        assert_eq!(format_seconds(0), "0s");
    }

    #[test]
    fn date_formats_rfc3339() {
        assert_eq!(
            format_date("2024-01-01T08:00:00Z").as_deref(),
            Some("Mon, Jan 01 2024 08:00")
        );
        assert_eq!(format_date("yesterday"), None);
    }

    #[test]
    fn conversion_is_deterministic() {
        let first = format_distance(5_000.0, &IMPERIAL);
        let second = format_distance(5_000.0, &IMPERIAL);
        assert_eq!(first, second);
    }
}
