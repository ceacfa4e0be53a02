use serde::{Deserialize, Serialize};

/// Who is flying the aircraft. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlMode {
    #[default]
    Manual,
    Autopilot,
    Mission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GearStatus {
    #[default]
    Up,
    Down,
    Transit,
}

/// Speed-brake position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardsStatus {
    #[default]
    None,
    In,
    Out,
}
