use bevy::prelude::*;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClockState {
    /// Never started.
    #[default]
    Unarmed,
    Running,
    Paused,
}

/// Authoritative elapsed-time source for the simulation.
///
/// Duration only accrues while running. Pausing freezes it and resuming
/// continues from the frozen value.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct SimulationClock {
    state: ClockState,
    /// Start time to use when armed, instead of the toggle time.
    preset_start_time: Option<DateTime<Utc>>,
    start_time: Option<DateTime<Utc>>,
    duration_ms: f64,
    last_increment_ms: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_time(start_time: DateTime<Utc>) -> Self {
        Self {
            preset_start_time: Some(start_time),
            ..Default::default()
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Accumulated running time in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Time credited by the most recent [`SimulationClock::increment_time`];
    /// zero unless the clock was running.
    pub fn last_increment_ms(&self) -> f64 {
        self.last_increment_ms
    }

    /// Start time plus accumulated duration; `None` until armed.
    pub fn current_time(&self) -> Option<DateTime<Utc>> {
        let micros = (self.duration_ms * 1_000.0) as i64;
        self.start_time
            .and_then(|start| start.checked_add_signed(TimeDelta::microseconds(micros)))
    }

    /// Applies the start/pause signal and returns the new state.
    pub fn toggle(&mut self, at: DateTime<Utc>) -> ClockState {
        self.state = match self.state {
            ClockState::Unarmed => {
                let start = self.preset_start_time.unwrap_or(at);
                self.start_time = Some(start);
                self.duration_ms = 0.0;
                info!("Simulation clock armed at {}", start.to_rfc3339());
                ClockState::Running
            }
            ClockState::Running => {
                info!("Simulation paused at {}", self.format_duration());
                ClockState::Paused
            }
            ClockState::Paused => {
                info!("Simulation resumed at {}", self.format_duration());
                ClockState::Running
            }
        };
        self.last_increment_ms = 0.0;
        self.state
    }

    /// Credits `delta_ms` of running time. Ignored unless running.
    pub fn increment_time(&mut self, delta_ms: f64) {
        self.last_increment_ms = 0.0;
        if !self.is_running() {
            return;
        }
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            warn!("Ignoring invalid clock increment of {} ms", delta_ms);
            return;
        }
        self.duration_ms += delta_ms;
        self.last_increment_ms = delta_ms;
    }

    /// Accumulated duration as `HH:MM:SS`, truncated to the whole second.
    pub fn format_duration(&self) -> String {
        let total_seconds = (self.duration_ms / 1_000.0).floor() as u64;
        let hours = total_seconds / 3_600;
        let minutes = (total_seconds % 3_600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
