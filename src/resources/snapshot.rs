use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::AircraftSnapshot;
use crate::resources::ClockState;

/// Everything published to displays at the end of a frame.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize)]
pub struct FlightSnapshot {
    pub aircraft: Option<AircraftSnapshot>,
    pub clock_state: ClockState,
    /// `HH:MM:SS` of accumulated running time.
    pub duration: String,
    pub current_time: Option<DateTime<Utc>>,
}
