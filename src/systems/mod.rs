mod clock;
mod controller;
mod environment;
mod estimator;
mod performance;
mod snapshot;

pub use clock::{
    clock_increment_system, clock_toggle_system, sample_frame_time_system, simulation_running,
};
pub use controller::command_system;
pub use environment::environment_update_system;
pub use estimator::{advance, estimator_system};
pub use performance::performance_system;
pub use snapshot::publish_snapshot_system;
