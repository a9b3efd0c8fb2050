//! API request types for activity operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::Serialize;

use super::sport::SportType;

/// Description attached to activities created without one.
pub const DEFAULT_DESCRIPTION: &str = "Uploaded with cli-tool ";

/// Legacy activity type sent alongside the sport type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Run,
    Walk,
    Ride,
    Swim,
    #[default]
    Workout,
}

/// Request payload for creating a manual activity.
///
/// Field order matches the form body sent to the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateActivityRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub sport_type: SportType,
    /// ISO-8601 local start time with UTC offset.
    pub start_date_local: String,
    /// Elapsed time in seconds.
    pub elapsed_time: u64,
    pub description: String,
    /// Distance in meters.
    pub distance: u32,
}

impl CreateActivityRequest {
    /// Create a request with the required fields. The elapsed time is given in minutes.
    pub fn new(
        name: impl Into<String>,
        sport_type: SportType,
        start_date_local: impl Into<String>,
        elapsed_minutes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            activity_type: ActivityType::default(),
            sport_type,
            start_date_local: start_date_local.into(),
            elapsed_time: elapsed_minutes_to_seconds(elapsed_minutes),
            description: DEFAULT_DESCRIPTION.to_string(),
            distance: 0,
        }
    }

    /// Set the legacy activity type.
    pub fn with_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = activity_type;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the distance in meters.
    pub fn with_distance(mut self, meters: u32) -> Self {
        self.distance = meters;
        self
    }
}

/// Convert whole minutes into the seconds the API expects.
pub fn elapsed_minutes_to_seconds(minutes: u32) -> u64 {
    u64::from(minutes) * 60
}
