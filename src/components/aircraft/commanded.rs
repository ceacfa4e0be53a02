use bevy::prelude::*;
use serde::Serialize;

use crate::components::aircraft::config::AirframeProfile;
use crate::components::aircraft::state::AircraftState;
use crate::resources::ControllerCommands;
use crate::units::{Degrees, Knots};
use crate::utils::clamp_symmetric;

/// Target for one controlled axis on the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum AxisCommand<T> {
    /// Hold the current value.
    #[default]
    NoCommand,
    Target(T),
}

impl<T: Copy> AxisCommand<T> {
    pub fn target(&self) -> Option<T> {
        match self {
            AxisCommand::NoCommand => None,
            AxisCommand::Target(value) => Some(*value),
        }
    }

    pub fn is_commanded(&self) -> bool {
        matches!(self, AxisCommand::Target(_))
    }
}

/// Where the controller wants the aircraft to go this tick.
///
/// Rebuilt from the controller flags every tick; nothing carries over.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CommandedAttitude {
    pub bank: AxisCommand<Degrees>,
    pub pitch: AxisCommand<Degrees>,
    pub speed: AxisCommand<Knots>,
}

impl CommandedAttitude {
    /// Turns the controller flags into per-axis targets one rate-step away
    /// from the current state, clamped to the airframe's envelope.
    pub fn update_from_controller_commands(
        &mut self,
        elapsed_ms: f64,
        commands: &ControllerCommands,
        state: &AircraftState,
        profile: &AirframeProfile,
    ) {
        let dt = elapsed_ms.max(0.0) / 1_000.0;
        let dynamics = profile.dynamics();

        self.bank = match axis_direction("roll", commands.roll_right, commands.roll_left) {
            Some(direction) => {
                let target = state.bank().value() + direction * dynamics.effective_roll_rate() * dt;
                AxisCommand::Target(Degrees::new(clamp_symmetric(
                    target,
                    profile.bank_limit().value(),
                )))
            }
            None => AxisCommand::NoCommand,
        };

        self.pitch = match axis_direction("pitch", commands.pitch_up, commands.pitch_down) {
            Some(direction) => {
                let target =
                    state.pitch().value() + direction * dynamics.effective_pitch_rate() * dt;
                AxisCommand::Target(Degrees::new(clamp_symmetric(
                    target,
                    profile.pitch_limit().value(),
                )))
            }
            None => AxisCommand::NoCommand,
        };

        self.speed = match axis_direction("throttle", commands.throttle_up, commands.throttle_down)
        {
            Some(direction) => {
                let target = state.equivalent_airspeed().value()
                    + direction * dynamics.effective_speed_rate() * dt;
                AxisCommand::Target(Knots::new(target.max(0.0)))
            }
            None => AxisCommand::NoCommand,
        };
    }
}

/// +1 for increase, -1 for decrease. Both or neither pressed means no command.
fn axis_direction(axis: &str, increase: bool, decrease: bool) -> Option<f64> {
    match (increase, decrease) {
        (true, false) => Some(1.0),
        (false, true) => Some(-1.0),
        (true, true) => {
            warn!("Contradictory {} commands ignored", axis);
            None
        }
        (false, false) => None,
    }
}
