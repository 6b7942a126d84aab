use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{AILERON_LIMIT, AILERON_STEP};

/// Discrete pilot input, one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlCommand {
    /// `A`: raise the aileron command.
    NudgeLeft,
    /// `D`: lower the aileron command.
    NudgeRight,
    /// `P`: engage or disengage the autopilot.
    ToggleAutopilot,
}

impl ControlCommand {
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'a' => Some(ControlCommand::NudgeLeft),
            'd' => Some(ControlCommand::NudgeRight),
            'p' => Some(ControlCommand::ToggleAutopilot),
            _ => None,
        }
    }
}

/// Aileron command and autopilot flag. Written only by the control systems
/// on the simulation thread; producers on other threads send
/// [`ControlCommand`]s over a channel instead.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlState {
    /// Aileron command in `[-30, 30]`.
    pub aileron: f64,
    pub autopilot: bool,
}

impl ControlState {
    pub fn apply(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                info!("Autopilot toggled to {}", self.autopilot);
            }
            // Manual input is locked out while the autopilot flies.
            _ if self.autopilot => {}
            ControlCommand::NudgeLeft => {
                self.aileron = (self.aileron + AILERON_STEP).min(AILERON_LIMIT);
            }
            ControlCommand::NudgeRight => {
                self.aileron = (self.aileron - AILERON_STEP).max(-AILERON_LIMIT);
            }
        }
    }
}

/// What the autopilot does once its command is pinned at the limit while the
/// bank error persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaturationPolicy {
    /// Drop the command to zero and let it wind up again.
    #[default]
    Reset,
    /// Keep the command at the limit.
    Hold,
}

/// How often the control law is evaluated within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlSampling {
    /// Sample once before the step, hold the command across all RK4 stages.
    #[default]
    PerTick,
    /// Re-evaluate the autopilot inside every RK4 stage.
    PerStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Command change per degree of bank.
    pub bank_gain: f64,
    /// Command change per deg/s of roll rate.
    pub rate_gain: f64,
    /// Command saturation magnitude.
    pub limit: f64,
    pub saturation: SaturationPolicy,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            bank_gain: 1.0 / 5.0,
            rate_gain: 1.0 / 3.0,
            limit: AILERON_LIMIT,
            saturation: SaturationPolicy::Reset,
        }
    }
}
