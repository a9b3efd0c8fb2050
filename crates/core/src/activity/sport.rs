//! Sport types accepted by the activity creation endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ActivityError;

/// Sport type of an activity. Serialized with the exact casing the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SportType {
    AlpineSki,
    BackcountrySki,
    Badminton,
    Canoeing,
    Crossfit,
    EBikeRide,
    Elliptical,
    EMountainBikeRide,
    Golf,
    GravelRide,
    Handcycle,
    HighIntensityIntervalTraining,
    Hike,
    IceSkate,
    InlineSkate,
    Kayaking,
    Kitesurf,
    MountainBikeRide,
    NordicSki,
    Pickleball,
    Pilates,
    Racquetball,
    Ride,
    RockClimbing,
    RollerSki,
    Rowing,
    Run,
    Sail,
    Skateboard,
    Snowboard,
    Snowshoe,
    Soccer,
    Squash,
    StairStepper,
    StandUpPaddling,
    Surfing,
    Swim,
    TableTennis,
    Tennis,
    TrailRun,
    Velomobile,
    VirtualRide,
    VirtualRow,
    VirtualRun,
    Walk,
    WeightTraining,
    Wheelchair,
    Windsurf,
    Workout,
    Yoga,
}

impl SportType {
    /// Every sport type, in alphabetical order.
    pub const ALL: [SportType; 50] = [
        SportType::AlpineSki,
        SportType::BackcountrySki,
        SportType::Badminton,
        SportType::Canoeing,
        SportType::Crossfit,
        SportType::EBikeRide,
        SportType::Elliptical,
        SportType::EMountainBikeRide,
        SportType::Golf,
        SportType::GravelRide,
        SportType::Handcycle,
        SportType::HighIntensityIntervalTraining,
        SportType::Hike,
        SportType::IceSkate,
        SportType::InlineSkate,
        SportType::Kayaking,
        SportType::Kitesurf,
        SportType::MountainBikeRide,
        SportType::NordicSki,
        SportType::Pickleball,
        SportType::Pilates,
        SportType::Racquetball,
        SportType::Ride,
        SportType::RockClimbing,
        SportType::RollerSki,
        SportType::Rowing,
        SportType::Run,
        SportType::Sail,
        SportType::Skateboard,
        SportType::Snowboard,
        SportType::Snowshoe,
        SportType::Soccer,
        SportType::Squash,
        SportType::StairStepper,
        SportType::StandUpPaddling,
        SportType::Surfing,
        SportType::Swim,
        SportType::TableTennis,
        SportType::Tennis,
        SportType::TrailRun,
        SportType::Velomobile,
        SportType::VirtualRide,
        SportType::VirtualRow,
        SportType::VirtualRun,
        SportType::Walk,
        SportType::WeightTraining,
        SportType::Wheelchair,
        SportType::Windsurf,
        SportType::Workout,
        SportType::Yoga,
    ];

    /// Wire name of the sport type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SportType::AlpineSki => "AlpineSki",
            SportType::BackcountrySki => "BackcountrySki",
            SportType::Badminton => "Badminton",
            SportType::Canoeing => "Canoeing",
            SportType::Crossfit => "Crossfit",
            SportType::EBikeRide => "EBikeRide",
            SportType::Elliptical => "Elliptical",
            SportType::EMountainBikeRide => "EMountainBikeRide",
            SportType::Golf => "Golf",
            SportType::GravelRide => "GravelRide",
            SportType::Handcycle => "Handcycle",
            SportType::HighIntensityIntervalTraining => "HighIntensityIntervalTraining",
            SportType::Hike => "Hike",
            SportType::IceSkate => "IceSkate",
            SportType::InlineSkate => "InlineSkate",
            SportType::Kayaking => "Kayaking",
            SportType::Kitesurf => "Kitesurf",
            SportType::MountainBikeRide => "MountainBikeRide",
            SportType::NordicSki => "NordicSki",
            SportType::Pickleball => "Pickleball",
            SportType::Pilates => "Pilates",
            SportType::Racquetball => "Racquetball",
            SportType::Ride => "Ride",
            SportType::RockClimbing => "RockClimbing",
            SportType::RollerSki => "RollerSki",
            SportType::Rowing => "Rowing",
            SportType::Run => "Run",
            SportType::Sail => "Sail",
            SportType::Skateboard => "Skateboard",
            SportType::Snowboard => "Snowboard",
            SportType::Snowshoe => "Snowshoe",
            SportType::Soccer => "Soccer",
            SportType::Squash => "Squash",
            SportType::StairStepper => "StairStepper",
            SportType::StandUpPaddling => "StandUpPaddling",
            SportType::Surfing => "Surfing",
            SportType::Swim => "Swim",
            SportType::TableTennis => "TableTennis",
            SportType::Tennis => "Tennis",
            SportType::TrailRun => "TrailRun",
            SportType::Velomobile => "Velomobile",
            SportType::VirtualRide => "VirtualRide",
            SportType::VirtualRow => "VirtualRow",
            SportType::VirtualRun => "VirtualRun",
            SportType::Walk => "Walk",
            SportType::WeightTraining => "WeightTraining",
            SportType::Wheelchair => "Wheelchair",
            SportType::Windsurf => "Windsurf",
            SportType::Workout => "Workout",
            SportType::Yoga => "Yoga",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportType {
    type Err = ActivityError;

    /// Matching is case-sensitive, the API rejects `run` as a sport type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SportType::ALL
            .iter()
            .copied()
            .find(|sport| sport.as_str() == s)
            .ok_or_else(|| ActivityError::UnknownSportType(s.to_string()))
    }
}
