pub const GRAVITY: f64 = 9.81; // m/s^2
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314; // J/(mol·K)
pub const AIR_SPECIFIC_HEAT_CP: f64 = 1005.0; // J/(kg·K), constant pressure
pub const AIR_MOLAR_MASS: f64 = 0.02897; // kg/mol
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const TEMP_LAPSE_PER_KFT: f64 = -2.0; // K per 1000 ft

// Drag coefficients
pub const BODY_DRAG_COEFFICIENT: f64 = 0.47; // sphere

/// Lever factor applied to the mid-span roll velocity to get the wingtip
/// velocity increment seen by each wing.
pub const WINGTIP_VELOCITY_FACTOR: f64 = 3.0;

/// Torque per unit of aileron command (N·m). Negative rolls left.
pub const AILERON_TORQUE_GAIN: f64 = -300.0;
/// Magnitude limit of the aileron command.
pub const AILERON_LIMIT: f64 = 30.0;
/// Aileron change per manual key press.
pub const AILERON_STEP: f64 = 2.0;

// Safety envelope
pub const MAX_SAFE_BANK: f64 = 90.0; // degrees
pub const DEFAULT_STALL_ANGLE: f64 = 15.0; // degrees

pub const DEFAULT_TICK_RATE: f64 = 60.0; // Hz
