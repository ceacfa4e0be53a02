use bevy::prelude::*;
use chrono::{DateTime, Utc};

use crate::resources::Environment;

/// Start/pause edge. `at` becomes the start time when the clock is armed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SimulationToggle {
    pub at: DateTime<Utc>,
}

impl SimulationToggle {
    pub fn now() -> Self {
        Self { at: Utc::now() }
    }
}

/// Replaces the ambient conditions wholesale between ticks.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnvironmentUpdate(pub Environment);
