use bevy::prelude::*;

use super::{AirframeConfig, AmbientAir, WingConfiguration};
use crate::utils::{
    deg_to_rad, ConfigError, BODY_DRAG_COEFFICIENT, GRAVITY, WINGTIP_VELOCITY_FACTOR,
};

/// Airframe constants derived once from an [`AirframeConfig`]. Immutable for
/// the life of a run; every force, torque and integration call borrows it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Airframe {
    config: AirframeConfig,
    air: AmbientAir,
    wing_area: f64,
    body_drag_area: f64,
    trim_aoa: f64,
}

impl Airframe {
    /// Validates `config` and derives the ambient air, planform, body drag and
    /// the trim angle of attack at which total lift balances weight at cruise
    /// with wings level.
    pub fn new(config: AirframeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let air = AmbientAir::at_altitude(config.altitude);
        if air.temperature.is_nan() || air.temperature <= 0.0 {
            return Err(ConfigError::invalid(
                "altitude",
                config.altitude,
                "ambient temperature falls to absolute zero",
            ));
        }
        if !air.density.is_finite() || air.density <= 0.0 {
            return Err(ConfigError::invalid(
                "altitude",
                config.altitude,
                "ambient density is not positive",
            ));
        }

        let airframe = Self::derive(config, air);
        info!(
            "Airframe derived: {} wing ({:.1}°), wing area {:.2} m², cruise {:.1} m/s, altitude {:.0} ft, trim AoA {:.3}°",
            airframe.wing_configuration(),
            airframe.config.dihedral,
            airframe.wing_area,
            airframe.config.cruise_speed,
            airframe.config.altitude,
            airframe.trim_aoa
        );

        Ok(airframe)
    }

    fn derive(config: AirframeConfig, air: AmbientAir) -> Self {
        let wing_area = config.wing_length * config.wing_width * 2.0;
        let body_drag_area = config.body_area * BODY_DRAG_COEFFICIENT;

        // Both wings share the weight; each carries lift over half the planform.
        let per_wing = air.dynamic_pressure(config.cruise_speed) * (wing_area / 2.0);
        let vertical_share = 2.0 * per_wing * deg_to_rad(config.dihedral).cos();
        let trim_aoa = (config.mass * GRAVITY / vertical_share - config.lift_coefficient_zero)
            / config.lift_slope;

        Self {
            config,
            air,
            wing_area,
            body_drag_area,
            trim_aoa,
        }
    }

    pub fn config(&self) -> &AirframeConfig {
        &self.config
    }

    pub fn air(&self) -> &AmbientAir {
        &self.air
    }

    pub fn density(&self) -> f64 {
        self.air.density
    }

    /// Total planform area of both wings (m²).
    pub fn wing_area(&self) -> f64 {
        self.wing_area
    }

    /// Body drag coefficient times cross-section (m²).
    pub fn body_drag_area(&self) -> f64 {
        self.body_drag_area
    }

    /// Angle of attack (degrees) at which lift cancels weight at cruise.
    pub fn trim_aoa(&self) -> f64 {
        self.trim_aoa
    }

    pub fn dihedral(&self) -> f64 {
        self.config.dihedral
    }

    pub fn mass(&self) -> f64 {
        self.config.mass
    }

    pub fn weight(&self) -> f64 {
        self.config.mass * GRAVITY
    }

    pub fn roll_inertia(&self) -> f64 {
        self.config.roll_inertia
    }

    pub fn cruise_speed(&self) -> f64 {
        self.config.cruise_speed
    }

    pub fn stall_angle(&self) -> f64 {
        self.config.stall_angle
    }

    pub fn constant_altitude(&self) -> bool {
        self.config.constant_altitude
    }

    /// Lift produced by one wing per unit lift coefficient at cruise (N).
    pub fn wing_lift_per_coefficient(&self) -> f64 {
        self.air.dynamic_pressure(self.config.cruise_speed) * (self.wing_area / 2.0)
    }

    /// Drag area scaled by the configured multiplier (m²).
    pub fn effective_drag_area(&self) -> f64 {
        self.body_drag_area * self.config.drag_multiplier
    }

    /// Linear velocity at each wing per deg/s of roll rate (m/s per deg/s).
    pub fn wingtip_lever(&self) -> f64 {
        deg_to_rad(1.0) * self.config.wing_length / 2.0 * WINGTIP_VELOCITY_FACTOR
    }

    /// Moment arm of each wing's lift about the roll axis (m).
    pub fn lift_arm(&self) -> f64 {
        self.config.wing_length / 2.0
    }

    pub fn wing_configuration(&self) -> WingConfiguration {
        WingConfiguration::from_dihedral(self.config.dihedral)
    }
}

impl Default for Airframe {
    fn default() -> Self {
        let config = AirframeConfig::default();
        let air = AmbientAir::at_altitude(config.altitude);
        Self::derive(config, air)
    }
}
