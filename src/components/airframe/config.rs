use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, DEFAULT_STALL_ANGLE};

/// User-supplied airframe and flight condition. Defaults describe a
/// Cessna 172-like light aircraft at 1000 ft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirframeConfig {
    /// Dihedral angle (degrees). Positive tilts the wings up, negative is anhedral.
    pub dihedral: f64,
    /// Total mass (kg).
    pub mass: f64,
    /// Half span: wing length from fuselage to tip (m).
    pub wing_length: f64,
    /// Chord length (m).
    pub wing_width: f64,
    /// Fuselage cross-section, drives sideslip and vertical drag (m²).
    pub body_area: f64,
    /// Lift coefficient at zero angle of attack.
    pub lift_coefficient_zero: f64,
    /// Lift coefficient rise per degree of angle of attack.
    pub lift_slope: f64,
    /// Cruise altitude (ft).
    pub altitude: f64,
    /// Cruise airspeed (m/s).
    pub cruise_speed: f64,
    /// Moment of inertia about the roll axis (kg·m²).
    pub roll_inertia: f64,
    /// Scales every drag force. Leave at 1 outside of parameter studies.
    pub drag_multiplier: f64,
    /// Re-trim both wings each evaluation so that net vertical force vanishes.
    pub constant_altitude: bool,
    /// Angle of attack magnitude beyond which a wing stalls (degrees).
    pub stall_angle: f64,
}

impl Default for AirframeConfig {
    fn default() -> Self {
        Self {
            dihedral: 3.0,
            mass: 1000.0,
            wing_length: 5.5,
            wing_width: 1.5,
            body_area: 5.0,
            lift_coefficient_zero: 0.25,
            lift_slope: 0.2,
            altitude: 1000.0,
            cruise_speed: 52.0,
            roll_inertia: 1000.0,
            drag_multiplier: 1.0,
            constant_altitude: false,
            stall_angle: DEFAULT_STALL_ANGLE,
        }
    }
}

impl AirframeConfig {
    /// Rejects inputs that would later surface as NaN or infinity in the
    /// force model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("dihedral", self.dihedral),
            ("mass", self.mass),
            ("wing_length", self.wing_length),
            ("wing_width", self.wing_width),
            ("body_area", self.body_area),
            ("lift_coefficient_zero", self.lift_coefficient_zero),
            ("lift_slope", self.lift_slope),
            ("altitude", self.altitude),
            ("cruise_speed", self.cruise_speed),
            ("roll_inertia", self.roll_inertia),
            ("drag_multiplier", self.drag_multiplier),
            ("stall_angle", self.stall_angle),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, value, "must be finite"));
            }
        }

        let positive = [
            ("mass", self.mass),
            ("wing_length", self.wing_length),
            ("wing_width", self.wing_width),
            ("body_area", self.body_area),
            ("cruise_speed", self.cruise_speed),
            ("roll_inertia", self.roll_inertia),
            ("stall_angle", self.stall_angle),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::invalid(name, value, "must be positive"));
            }
        }

        if self.drag_multiplier < 0.0 {
            return Err(ConfigError::invalid(
                "drag_multiplier",
                self.drag_multiplier,
                "must not be negative",
            ));
        }

        if self.dihedral.abs() >= 90.0 {
            return Err(ConfigError::invalid(
                "dihedral",
                self.dihedral,
                "must lie strictly between -90 and 90 degrees",
            ));
        }

        if self.lift_slope == 0.0 {
            return Err(ConfigError::invalid(
                "lift_slope",
                self.lift_slope,
                "must be non-zero to solve for trim",
            ));
        }

        Ok(())
    }
}
