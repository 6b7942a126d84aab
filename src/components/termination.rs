use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::{LateralState, WingSide};
use crate::utils::{SimulationFault, StallCondition, MAX_SAFE_BANK};

/// Finite world the aircraft flies in, measured in display units (pixels).
/// Physical displacement maps onto it as `origin + scale * (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
    /// World position of the aircraft at the start of the run.
    pub origin: Vector2<f64>,
    /// World units per metre.
    pub scale: f64,
}

impl Default for WorldBounds {
    fn default() -> Self {
        // 3000 x 1097 backdrop, aircraft starting half a 700 px window below the top.
        Self {
            width: 3000.0,
            height: 1097.0,
            origin: Vector2::new(1500.0, 1097.0 - 350.0),
            scale: 10.0,
        }
    }
}

impl WorldBounds {
    pub fn world_position(&self, state: &LateralState) -> Vector2<f64> {
        self.origin + Vector2::new(state.x, state.y) * self.scale
    }

    pub fn contains(&self, position: &Vector2<f64>) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The aircraft left the world; a normal end.
    BoundaryExceeded { x: f64, y: f64 },
    /// Bank magnitude went past the safe limit; a normal end.
    UnsafeBankAngle { bank: f64 },
    /// A wing stalled mid-step; the run aborted.
    Stalled {
        wing: WingSide,
        angle_of_attack: f64,
        threshold: f64,
    },
    /// Integration produced a non-finite state; the run aborted.
    Diverged,
}

impl From<StallCondition> for TerminationReason {
    fn from(stall: StallCondition) -> Self {
        TerminationReason::Stalled {
            wing: stall.wing,
            angle_of_attack: stall.angle_of_attack,
            threshold: stall.threshold,
        }
    }
}

impl From<&SimulationFault> for TerminationReason {
    fn from(fault: &SimulationFault) -> Self {
        match fault {
            SimulationFault::Stall(stall) => (*stall).into(),
            SimulationFault::NonFiniteState(_) => TerminationReason::Diverged,
        }
    }
}

impl TerminationReason {
    /// True for the policy checks, false for faults that aborted the run.
    pub fn is_normal(&self) -> bool {
        matches!(
            self,
            TerminationReason::BoundaryExceeded { .. } | TerminationReason::UnsafeBankAngle { .. }
        )
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::BoundaryExceeded { x, y } => write!(
                f,
                "Aircraft has left the world boundaries at ({:.1}, {:.1})",
                x, y
            ),
            TerminationReason::UnsafeBankAngle { bank } => {
                write!(f, "Aircraft has exceeded safe bank angle ({:.1}°)", bank)
            }
            TerminationReason::Stalled {
                wing,
                angle_of_attack,
                threshold,
            } => write!(
                f,
                "Stall on {} wing: angle of attack {:.2}° beyond ±{:.2}°",
                wing, angle_of_attack, threshold
            ),
            TerminationReason::Diverged => write!(f, "Integration diverged"),
        }
    }
}

/// Post-step safety checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationPolicy {
    pub bounds: WorldBounds,
    /// Largest bank magnitude still considered safe (degrees).
    pub max_bank: f64,
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        Self {
            bounds: WorldBounds::default(),
            max_bank: MAX_SAFE_BANK,
        }
    }
}

impl TerminationPolicy {
    /// Evaluates the world bounds first, then the bank limit.
    pub fn evaluate(&self, state: &LateralState) -> Option<TerminationReason> {
        let position = self.bounds.world_position(state);
        if !self.bounds.contains(&position) {
            return Some(TerminationReason::BoundaryExceeded {
                x: position.x,
                y: position.y,
            });
        }

        if state.bank.abs() > self.max_bank {
            return Some(TerminationReason::UnsafeBankAngle { bank: state.bank });
        }

        None
    }
}
