use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{AircraftState, AirframeProfile, AxisCommand, CommandedAttitude};
use crate::resources::SimulationClock;
use crate::units::{Degrees, Feet, Knots, Quantity, Unit};
use crate::utils::{clamp_symmetric, rate_limit};

/// Moves each aircraft toward its commanded attitude.
pub fn estimator_system(
    mut query: Query<(&mut AircraftState, &CommandedAttitude, &AirframeProfile)>,
    clock: Res<SimulationClock>,
) {
    let elapsed_ms = clock.last_increment_ms();

    for (mut state, commanded, profile) in query.iter_mut() {
        advance(&mut state, commanded, profile, elapsed_ms);
    }
}

/// Advances one aircraft by `elapsed_ms`.
///
/// Bank, pitch and speed each step toward their target by at most the
/// airframe's effective rate times the elapsed time, landing exactly on the
/// target when it is within reach. Heading, altitude and position are then
/// integrated from the derived values of the previous performance pass.
pub fn advance(
    state: &mut AircraftState,
    commanded: &CommandedAttitude,
    profile: &AirframeProfile,
    elapsed_ms: f64,
) {
    let dt = elapsed_ms.max(0.0) / 1_000.0;
    if dt == 0.0 {
        return;
    }
    let dynamics = profile.dynamics();

    let bank = track(
        state.bank(),
        commanded.bank,
        dynamics.effective_roll_rate() * dt,
    );
    state.set_bank(Degrees::new(clamp_symmetric(
        bank.value(),
        profile.bank_limit().value(),
    )));

    let pitch = track(
        state.pitch(),
        commanded.pitch,
        dynamics.effective_pitch_rate() * dt,
    );
    state.set_pitch(Degrees::new(clamp_symmetric(
        pitch.value(),
        profile.pitch_limit().value(),
    )));

    let speed = track(
        state.equivalent_airspeed(),
        commanded.speed,
        dynamics.effective_speed_rate() * dt,
    );
    state.set_equivalent_airspeed(speed.max(Knots::ZERO));

    // Previous tick's derived values; the performance pass runs after this.
    let perf = *state.performance();

    state.set_heading(state.heading().rotate(Degrees::new(perf.turn_rate * dt)));

    let climb_fps = perf.vertical_speed.value() / 60.0;
    let altitude = (state.altitude() + Feet::new(climb_fps * dt))
        .clamp(Feet::ZERO, profile.limits().max_altitude);
    state.set_altitude(altitude);

    let distance = perf.ground_speed.feet_per_second() * dt;
    let course = perf.course.radians();
    state.set_position(state.position() + Vector2::new(course.sin(), course.cos()) * distance);

    debug!(
        "bank {:.2} pitch {:.2} keas {:.1} heading {} altitude {:.1}",
        state.bank().value(),
        state.pitch().value(),
        state.equivalent_airspeed().value(),
        state.heading(),
        state.altitude().value()
    );
}

fn track<U: Unit>(
    current: Quantity<U>,
    command: AxisCommand<Quantity<U>>,
    max_step: f64,
) -> Quantity<U> {
    match command {
        AxisCommand::Target(target) => {
            Quantity::new(rate_limit(current.value(), target.value(), max_step))
        }
        AxisCommand::NoCommand => current,
    }
}
