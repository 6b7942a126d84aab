use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::components::{AirframeConfig, AutopilotConfig, ControlSampling, TerminationPolicy};
use crate::utils::{ConfigError, Result, DEFAULT_TICK_RATE};

/// Everything needed to start a run: airframe inputs, initial perturbation,
/// tick rate, control tuning and where telemetry goes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub airframe: AirframeConfig,
    /// Initial bank angle away from wings-level trim (degrees).
    pub initial_bank: f64,
    /// Integration steps per simulated second.
    pub tick_rate: f64,
    pub termination: TerminationPolicy,
    pub autopilot: AutopilotConfig,
    pub sampling: ControlSampling,
    /// Directory for telemetry files; `None` disables telemetry.
    pub telemetry_dir: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            airframe: AirframeConfig::default(),
            initial_bank: 5.0,
            tick_rate: DEFAULT_TICK_RATE,
            termination: TerminationPolicy::default(),
            autopilot: AutopilotConfig::default(),
            sampling: ControlSampling::default(),
            telemetry_dir: None,
        }
    }
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Fixed integration step (s).
    pub fn timestep(&self) -> f64 {
        1.0 / self.tick_rate
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.airframe.validate()?;

        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::invalid(
                "tick_rate",
                self.tick_rate,
                "must be positive",
            ));
        }
        if !self.initial_bank.is_finite() {
            return Err(ConfigError::invalid(
                "initial_bank",
                self.initial_bank,
                "must be finite",
            ));
        }
        if !self.autopilot.limit.is_finite() || self.autopilot.limit <= 0.0 {
            return Err(ConfigError::invalid(
                "autopilot.limit",
                self.autopilot.limit,
                "must be positive",
            ));
        }
        if self.termination.bounds.scale <= 0.0 {
            return Err(ConfigError::invalid(
                "termination.bounds.scale",
                self.termination.bounds.scale,
                "must be positive",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SaturationPolicy;
    use crate::utils::SimError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.initial_bank, 5.0);
        assert_eq!(config.timestep(), 1.0 / 60.0);
        assert_eq!(config.sampling, ControlSampling::PerTick);
        assert!(config.telemetry_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let mut config = SimulationConfig::default();
        config.airframe.dihedral = 7.0;
        config.autopilot.saturation = SaturationPolicy::Hold;
        config.telemetry_dir = Some(PathBuf::from("runs"));

        let temp_file = NamedTempFile::new()?;
        config.save(temp_file.path())?;
        let loaded = SimulationConfig::load(temp_file.path())?;

        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "initial_bank: -12.5")?;
        writeln!(file, "airframe:")?;
        writeln!(file, "  mass: 1200.0")?;
        writeln!(file, "sampling: PerStage")?;

        let config = SimulationConfig::load(file.path())?;
        assert_eq!(config.initial_bank, -12.5);
        assert_eq!(config.airframe.mass, 1200.0);
        assert_eq!(config.airframe.dihedral, 3.0);
        assert_eq!(config.sampling, ControlSampling::PerStage);
        Ok(())
    }

    #[test]
    fn test_invalid_values_rejected_on_load() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "tick_rate: 0")?;

        assert!(matches!(
            SimulationConfig::load(file.path()),
            Err(SimError::InvalidConfig(ConfigError::InvalidParameter {
                name: "tick_rate",
                ..
            }))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
