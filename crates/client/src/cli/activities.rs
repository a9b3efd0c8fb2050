//! Activity CLI commands.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, ValueEnum};
use strava_core::activity::{SportType, DEFAULT_DESCRIPTION};

use super::OutputFormat;

// Re-export core ActivityType for API usage
pub use strava_core::activity::ActivityType as CoreActivityType;

/// Arguments for `get-activity`.
#[derive(Debug, Args)]
pub struct GetActivityArgs {
    /// Activity IDs, fetched and printed in order.
    #[arg(required = true, num_args = 1..)]
    pub activity_ids: Vec<u64>,

    /// Show distances, speeds and elevations in imperial units.
    #[arg(short = 'i', long = "imperial_units", alias = "imperial-units")]
    pub imperial_units: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// CLI activity type (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ActivityType {
    Run,
    Walk,
    Ride,
    Swim,
    #[default]
    Workout,
}

impl From<ActivityType> for CoreActivityType {
    fn from(t: ActivityType) -> Self {
        match t {
            ActivityType::Run => CoreActivityType::Run,
            ActivityType::Walk => CoreActivityType::Walk,
            ActivityType::Ride => CoreActivityType::Ride,
            ActivityType::Swim => CoreActivityType::Swim,
            ActivityType::Workout => CoreActivityType::Workout,
        }
    }
}

/// Arguments for `post-activity`.
#[derive(Debug, Args)]
pub struct PostActivityArgs {
    /// Activity name.
    #[arg(short, long)]
    pub name: String,

    /// Legacy activity type.
    #[arg(short = 't', long = "type", value_enum, default_value_t = ActivityType::Workout)]
    pub activity_type: ActivityType,

    /// Sport type, e.g. Run, Ride or WeightTraining.
    #[arg(
        short = 's',
        long = "sport_type",
        alias = "sport-type",
        value_parser = sport_type_parser(),
        hide_possible_values = true
    )]
    pub sport_type: SportType,

    /// Start date and time, e.g. "2024-01-01 08:00", "yesterday" or "2 hours ago".
    #[arg(short = 'd', long = "start_date_local", alias = "start-date-local")]
    pub start_date_local: String,

    /// Elapsed time in minutes.
    #[arg(short = 'e', long = "elapsed_time", alias = "elapsed-time")]
    pub elapsed_time: u32,

    /// Activity description.
    #[arg(short = 'm', long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Distance in meters.
    #[arg(short = 'l', long, default_value_t = 0)]
    pub distance: u32,

    /// Output format for the created activity.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Accepts only the known sport type names, with the exact casing the API expects.
fn sport_type_parser() -> impl TypedValueParser<Value = SportType> {
    PossibleValuesParser::new(SportType::ALL.map(|sport| sport.as_str()))
        .try_map(|name| name.parse::<SportType>())
}
