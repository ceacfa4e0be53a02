use bevy::prelude::*;

use crate::resources::{SimulationClock, SimulationToggle, TickDriver, TickInput};

/// Copies Bevy's frame delta into [`TickInput`] when the driver asks for it.
pub fn sample_frame_time_system(
    time: Res<Time>,
    driver: Res<TickDriver>,
    mut tick: ResMut<TickInput>,
) {
    if let TickDriver::BevyTime { max_frame_ms } = *driver {
        let frame_ms = time.delta().as_secs_f64() * 1_000.0;
        if frame_ms > max_frame_ms {
            debug!("Clamping {:.1} ms frame to {:.1} ms", frame_ms, max_frame_ms);
        }
        tick.elapsed_ms = frame_ms.min(max_frame_ms);
    }
}

/// Applies start/pause signals in the order they arrived.
pub fn clock_toggle_system(
    mut toggles: EventReader<SimulationToggle>,
    mut clock: ResMut<SimulationClock>,
) {
    for toggle in toggles.read() {
        clock.toggle(toggle.at);
    }
}

pub fn clock_increment_system(tick: Res<TickInput>, mut clock: ResMut<SimulationClock>) {
    clock.increment_time(tick.elapsed_ms);
}

/// Run condition gating the flight systems.
pub fn simulation_running(clock: Res<SimulationClock>) -> bool {
    clock.is_running()
}
