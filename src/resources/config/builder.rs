use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::AirframeConfig;
use crate::utils::ConfigError;

/// Builds an [`AirframeConfig`] from partial input, falling back to the
/// defaults for anything left unset.
#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct AirframeConfigBuilder {
    pub dihedral: Option<f64>,
    pub mass: Option<f64>,
    pub wing_length: Option<f64>,
    pub wing_width: Option<f64>,
    pub body_area: Option<f64>,
    pub lift_coefficient_zero: Option<f64>,
    pub lift_slope: Option<f64>,
    pub altitude: Option<f64>,
    pub cruise_speed: Option<f64>,
    pub roll_inertia: Option<f64>,
    pub drag_multiplier: Option<f64>,
    pub constant_altitude: Option<bool>,
    pub stall_angle: Option<f64>,
}

impl AirframeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dihedral(mut self, degrees: f64) -> Self {
        self.dihedral = Some(degrees);
        self
    }

    pub fn mass(mut self, kg: f64) -> Self {
        self.mass = Some(kg);
        self
    }

    pub fn wing_length(mut self, length: f64) -> Self {
        self.wing_length = Some(length);
        self
    }

    pub fn wing_width(mut self, width: f64) -> Self {
        self.wing_width = Some(width);
        self
    }

    pub fn body_area(mut self, area: f64) -> Self {
        self.body_area = Some(area);
        self
    }

    pub fn lift_coefficient_zero(mut self, cl0: f64) -> Self {
        self.lift_coefficient_zero = Some(cl0);
        self
    }

    pub fn lift_slope(mut self, slope: f64) -> Self {
        self.lift_slope = Some(slope);
        self
    }

    pub fn altitude(mut self, feet: f64) -> Self {
        self.altitude = Some(feet);
        self
    }

    pub fn cruise_speed(mut self, speed: f64) -> Self {
        self.cruise_speed = Some(speed);
        self
    }

    pub fn roll_inertia(mut self, inertia: f64) -> Self {
        self.roll_inertia = Some(inertia);
        self
    }

    pub fn drag_multiplier(mut self, multiplier: f64) -> Self {
        self.drag_multiplier = Some(multiplier);
        self
    }

    pub fn constant_altitude(mut self, enabled: bool) -> Self {
        self.constant_altitude = Some(enabled);
        self
    }

    pub fn stall_angle(mut self, degrees: f64) -> Self {
        self.stall_angle = Some(degrees);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::ValidationError(
                "airframe config must be a JSON object".to_string(),
            ));
        }

        let number = |key: &str| -> Result<Option<f64>, ConfigError> {
            match value.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(v) => v.as_f64().map(Some).ok_or_else(|| {
                    ConfigError::ValidationError(format!("'{}' must be a number, got {}", key, v))
                }),
            }
        };

        let constant_altitude = match value.get("constant_altitude") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_bool().ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "'constant_altitude' must be a boolean, got {}",
                    v
                ))
            })?),
        };

        Ok(Self {
            dihedral: number("dihedral")?,
            mass: number("mass")?,
            wing_length: number("wing_length")?,
            wing_width: number("wing_width")?,
            body_area: number("body_area")?,
            lift_coefficient_zero: number("lift_coefficient_zero")?,
            lift_slope: number("lift_slope")?,
            altitude: number("altitude")?,
            cruise_speed: number("cruise_speed")?,
            roll_inertia: number("roll_inertia")?,
            drag_multiplier: number("drag_multiplier")?,
            constant_altitude,
            stall_angle: number("stall_angle")?,
        })
    }

    pub fn build(self) -> Result<AirframeConfig, ConfigError> {
        let defaults = AirframeConfig::default();
        let config = AirframeConfig {
            dihedral: self.dihedral.unwrap_or(defaults.dihedral),
            mass: self.mass.unwrap_or(defaults.mass),
            wing_length: self.wing_length.unwrap_or(defaults.wing_length),
            wing_width: self.wing_width.unwrap_or(defaults.wing_width),
            body_area: self.body_area.unwrap_or(defaults.body_area),
            lift_coefficient_zero: self
                .lift_coefficient_zero
                .unwrap_or(defaults.lift_coefficient_zero),
            lift_slope: self.lift_slope.unwrap_or(defaults.lift_slope),
            altitude: self.altitude.unwrap_or(defaults.altitude),
            cruise_speed: self.cruise_speed.unwrap_or(defaults.cruise_speed),
            roll_inertia: self.roll_inertia.unwrap_or(defaults.roll_inertia),
            drag_multiplier: self.drag_multiplier.unwrap_or(defaults.drag_multiplier),
            constant_altitude: self.constant_altitude.unwrap_or(defaults.constant_altitude),
            stall_angle: self.stall_angle.unwrap_or(defaults.stall_angle),
        };

        config.validate()?;
        Ok(config)
    }
}
