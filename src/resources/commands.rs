use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Instantaneous controller flags, sampled once per tick.
///
/// Whatever produces input (keyboard, gamepad, script) overwrites this
/// resource; only the current state matters and nothing is queued.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControllerCommands {
    pub roll_left: bool,
    pub roll_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
}

impl ControllerCommands {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
