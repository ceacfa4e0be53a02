use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Milliseconds elapsed since the previous tick, consumed by the clock.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub elapsed_ms: f64,
}

impl TickInput {
    pub fn new(elapsed_ms: f64) -> Self {
        Self { elapsed_ms }
    }
}

/// How the clock is fed, chosen by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickSource {
    /// The host writes `TickInput` before each update.
    Manual,
    /// Bevy's frame time, clamped by the session's clock config.
    #[default]
    BevyTime,
}

/// Where [`TickInput`] comes from.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickDriver {
    /// An outside collaborator writes `TickInput` before each update.
    Manual,
    /// Sampled from Bevy's `Time`, with long frames clamped.
    BevyTime { max_frame_ms: f64 },
}
