#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_bearing_valid, assert_snapshot_matches, assert_state_within_envelope};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
