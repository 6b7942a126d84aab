use serde::{Deserialize, Serialize};

use crate::utils::{
    AIR_MOLAR_MASS, AIR_SPECIFIC_HEAT_CP, GRAVITY, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMP,
    TEMP_LAPSE_PER_KFT, UNIVERSAL_GAS_CONSTANT,
};

/// Ambient air at the cruise altitude. Treated as constant for the run:
/// altitude excursions in the lateral model are small.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientAir {
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Static temperature (K).
    pub temperature: f64,
    /// Density from the ideal gas law (kg/m³).
    pub density: f64,
}

impl AmbientAir {
    /// Barometric pressure and linear temperature lapse evaluated at
    /// `altitude_ft`, density from the ideal gas law.
    pub fn at_altitude(altitude_ft: f64) -> Self {
        let exponent = -AIR_SPECIFIC_HEAT_CP * AIR_MOLAR_MASS / UNIVERSAL_GAS_CONSTANT;
        let pressure = SEA_LEVEL_PRESSURE
            * (1.0 + GRAVITY * altitude_ft / (AIR_SPECIFIC_HEAT_CP * SEA_LEVEL_TEMP)).powf(exponent);
        let temperature = SEA_LEVEL_TEMP + TEMP_LAPSE_PER_KFT * altitude_ft / 1000.0;
        let density = pressure * AIR_MOLAR_MASS / (UNIVERSAL_GAS_CONSTANT * temperature);

        Self {
            pressure,
            temperature,
            density,
        }
    }

    pub fn sea_level() -> Self {
        Self::at_altitude(0.0)
    }

    /// Dynamic pressure at `airspeed` (Pa).
    pub fn dynamic_pressure(&self, airspeed: f64) -> f64 {
        0.5 * self.density * airspeed * airspeed
    }
}
