pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const MEAN_EARTH_RADIUS: f64 = 6_378_100.0; // m
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const KELVIN_OFFSET: f64 = 273.15;

// Quadratic fit of air density (kg/m^3) against altitude (ft), 1976 standard atmosphere
pub const DENSITY_FIT_C0: f64 = 1.22;
pub const DENSITY_FIT_C1: f64 = -3.39e-5;
pub const DENSITY_FIT_C2: f64 = 2.8e-10;
// Highest altitude (ft) the density and speed-of-sound fits are flown at
pub const MAX_FITTED_ALTITUDE: f64 = 60_000.0;

// Linear fit of the speed of sound (m/s) against altitude (kft)
pub const SPEED_OF_SOUND_FIT_SLOPE: f64 = -1.2188;
pub const SPEED_OF_SOUND_FIT_INTERCEPT: f64 = 341.59;
pub const MPS_TO_KNOTS_FIT: f64 = 1.944;

// Numeric guards
pub const MAX_COMPUTABLE_BANK: f64 = 89.9; // degrees
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6; // m/s
pub const LEVEL_BANK_THRESHOLD: f64 = 1e-9; // degrees

pub const DEFAULT_MAX_FRAME_MS: f64 = 250.0;
