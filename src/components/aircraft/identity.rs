use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Name and registration of the simulated aircraft.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AircraftIdentity {
    name: String,
    tail_number: String,
}

impl AircraftIdentity {
    pub fn new(name: impl Into<String>, tail_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tail_number: tail_number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tail_number(&self) -> &str {
        &self.tail_number
    }

    pub fn set_tail_number(&mut self, tail_number: impl Into<String>) {
        self.tail_number = tail_number.into();
    }
}
