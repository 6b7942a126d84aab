use bevy::prelude::*;
use nalgebra::Vector6;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::SimError;

/// Lateral state of the aircraft relative to its trimmed start point.
///
/// Viewed head on: `x` is positive to the right, `y` positive up. Positive
/// `bank` (degrees) puts the pilot's left wing up.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LateralState {
    /// Lateral displacement (m).
    pub x: f64,
    /// Altitude change (m).
    pub y: f64,
    /// Bank angle (degrees).
    pub bank: f64,
    /// Sideslip rate (m/s).
    pub x_rate: f64,
    /// Vertical rate (m/s).
    pub y_rate: f64,
    /// Roll rate (deg/s).
    pub bank_rate: f64,
}

impl LateralState {
    /// Trimmed flight disturbed only by an initial bank angle.
    pub fn perturbed(bank: f64) -> Self {
        Self {
            bank,
            ..Default::default()
        }
    }

    /// Packs the state as `(x, ẋ, y, ẏ, bank, bank_rate)`.
    pub fn to_vector(&self) -> Vector6<f64> {
        Vector6::new(
            self.x,
            self.x_rate,
            self.y,
            self.y_rate,
            self.bank,
            self.bank_rate,
        )
    }

    pub fn from_vector(v: &Vector6<f64>) -> Self {
        Self {
            x: v[0],
            x_rate: v[1],
            y: v[2],
            y_rate: v[3],
            bank: v[4],
            bank_rate: v[5],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|v| v.is_finite())
    }

    pub fn telemetry(&self, elapsed: f64) -> TelemetryRecord {
        TelemetryRecord {
            x: self.x,
            y: self.y,
            bank: self.bank,
            elapsed,
        }
    }
}

/// One line of flight telemetry: position, bank and simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub x: f64,
    pub y: f64,
    pub bank: f64,
    pub elapsed: f64,
}

impl fmt::Display for TelemetryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.bank, self.elapsed)
    }
}

impl FromStr for TelemetryRecord {
    type Err = SimError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let values = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|e| {
                    SimError::TelemetryError(format!("bad field '{}': {}", field, e))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match values.as_slice() {
            [x, y, bank, elapsed] => Ok(Self {
                x: *x,
                y: *y,
                bank: *bank,
                elapsed: *elapsed,
            }),
            _ => Err(SimError::TelemetryError(format!(
                "expected 4 fields, found {} in '{}'",
                values.len(),
                line
            ))),
        }
    }
}
