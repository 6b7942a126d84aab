use std::io;
use thiserror::Error;

use crate::components::WingSide;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Simulation fault: {0}")]
    Fault(#[from] SimulationFault),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

/// Rejected airframe or simulation configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}' with value '{value}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        ConfigError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// A wing whose angle of attack left the flyable envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallCondition {
    pub wing: WingSide,
    /// Angle of attack that tripped the check (degrees).
    pub angle_of_attack: f64,
    /// Configured threshold (degrees).
    pub threshold: f64,
}

/// Fatal to the current run; the integrator never recovers from these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationFault {
    #[error(
        "stall condition on {} wing: angle of attack {:.2}° exceeds ±{:.2}°",
        .0.wing, .0.angle_of_attack, .0.threshold
    )]
    Stall(StallCondition),

    #[error("state became non-finite: {0}")]
    NonFiniteState(String),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
