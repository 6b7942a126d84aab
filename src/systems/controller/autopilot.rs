use crate::components::{AutopilotConfig, SaturationPolicy};
use crate::utils::AILERON_TORQUE_GAIN;

/// Source of the aileron command seen by the equations of motion at each
/// integration stage.
pub trait RollControl {
    /// Aileron command for the stage state. May update the held command.
    fn stage_command(&mut self, bank: f64, bank_rate: f64) -> f64;

    /// Aileron command currently held.
    fn command(&self) -> f64;
}

/// Aileron command sampled once and held across every stage of a step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeldCommand(pub f64);

impl RollControl for HeldCommand {
    fn stage_command(&mut self, _bank: f64, _bank_rate: f64) -> f64 {
        self.0
    }

    fn command(&self) -> f64 {
        self.0
    }
}

/// Autopilot re-evaluated at every integration stage, carrying its command
/// from one stage to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageAutopilot {
    pub config: AutopilotConfig,
    pub aileron: f64,
}

impl StageAutopilot {
    pub fn new(config: AutopilotConfig, aileron: f64) -> Self {
        Self { config, aileron }
    }
}

impl RollControl for StageAutopilot {
    fn stage_command(&mut self, bank: f64, bank_rate: f64) -> f64 {
        self.aileron = autopilot_command(&self.config, self.aileron, bank, bank_rate);
        self.aileron
    }

    fn command(&self) -> f64 {
        self.aileron
    }
}

/// Torque produced by an aileron command.
pub fn aileron_torque(aileron: f64) -> f64 {
    aileron * AILERON_TORQUE_GAIN
}

/// Total roll torque: aerodynamic restoring torque plus the aileron
/// contribution.
pub fn control_torque(aero_torque: f64, aileron: f64) -> f64 {
    aero_torque + aileron_torque(aileron)
}

/// One evaluation of the proportional-derivative bank hold.
///
/// While the command still has room in the direction that opposes the bank,
/// it is nudged by `-(bank * bank_gain + bank_rate * rate_gain)` and clamped
/// to the limit. Wings exactly level zero the command. Otherwise the command
/// is saturated and the configured [`SaturationPolicy`] applies.
pub fn autopilot_command(config: &AutopilotConfig, aileron: f64, bank: f64, bank_rate: f64) -> f64 {
    let limit = config.limit;
    let has_authority = (bank > 0.0 && aileron > -limit) || (bank < 0.0 && aileron < limit);

    if has_authority {
        let nudge = bank * config.bank_gain + bank_rate * config.rate_gain;
        (aileron - nudge).clamp(-limit, limit)
    } else if bank == 0.0 {
        0.0
    } else {
        match config.saturation {
            SaturationPolicy::Hold => aileron.clamp(-limit, limit),
            SaturationPolicy::Reset => 0.0,
        }
    }
}
