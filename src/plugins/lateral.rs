use bevy::prelude::*;

use crate::components::{AirData, Airframe, ControlState, LateralState};
use crate::resources::{
    simulation_running, SimulationClock, SimulationConfig, SimulationEnded, SimulationStatus,
    StepCompleted, TelemetryWriter,
};
use crate::systems::{
    apply_control_commands, autopilot_system, control_channel, finish_telemetry_system,
    keyboard_control_system, lateral_integrator_system, telemetry_system, termination_system,
};
use crate::utils::ConfigError;

/// Per-tick stages, run in this order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum SimulationSet {
    /// Drain queued commands, sample the autopilot.
    Control,
    /// One RK4 step.
    Integration,
    /// Post-step safety checks.
    Termination,
    /// Persist the step.
    Telemetry,
}

/// Marker for the simulated aircraft.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Aircraft;

/// Lateral dynamics simulation.
///
/// Owns the derived airframe, the control channel and the fixed tick that
/// steps the aircraft. Ticks stop for good once a termination fires.
pub struct LateralSimPlugin {
    config: SimulationConfig,
    airframe: Airframe,
}

impl LateralSimPlugin {
    /// Validates the configuration and derives the airframe constants.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let airframe = Airframe::new(config.airframe.clone())?;
        Ok(Self { config, airframe })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    /// Spawns the aircraft at its initial bank perturbation.
    fn setup_aircraft(mut commands: Commands, config: Res<SimulationConfig>) {
        let state = LateralState::perturbed(config.initial_bank);
        info!("Starting from bank {:.2}° at rest", state.bank);
        commands.spawn((Aircraft, state, AirData::default(), Name::new("aircraft")));
    }

    /// Opens the telemetry file if a directory is configured. Failure only
    /// disables telemetry.
    fn setup_telemetry(mut commands: Commands, config: Res<SimulationConfig>) {
        let Some(dir) = &config.telemetry_dir else {
            return;
        };

        match TelemetryWriter::create(dir) {
            Ok(writer) => {
                commands.insert_resource(writer);
            }
            Err(e) => warn!(
                "Telemetry disabled, cannot write to {}: {}",
                dir.display(),
                e
            ),
        }
    }
}

impl Plugin for LateralSimPlugin {
    fn build(&self, app: &mut App) {
        let (sender, inbox) = control_channel();

        // 1. Resources shared by the tick
        app.insert_resource(self.config.clone())
            .insert_resource(self.airframe.clone())
            .insert_resource(SimulationClock::new(self.config.timestep()))
            .insert_resource(Time::<Fixed>::from_hz(self.config.tick_rate))
            .init_resource::<SimulationStatus>()
            .init_resource::<ControlState>()
            .insert_resource(sender)
            .insert_resource(inbox)
            .add_event::<StepCompleted>()
            .add_event::<SimulationEnded>();

        // 2. Spawn the aircraft and open telemetry
        app.add_systems(Startup, (Self::setup_aircraft, Self::setup_telemetry));

        // 3. Control -> Integration -> Termination -> Telemetry
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Control,
                SimulationSet::Integration,
                SimulationSet::Termination,
                SimulationSet::Telemetry,
            )
                .chain(),
        )
        .configure_sets(
            FixedUpdate,
            (
                SimulationSet::Control,
                SimulationSet::Integration,
                SimulationSet::Termination,
            )
                .run_if(simulation_running),
        )
        .add_systems(
            FixedUpdate,
            (
                (apply_control_commands, autopilot_system)
                    .chain()
                    .in_set(SimulationSet::Control),
                lateral_integrator_system.in_set(SimulationSet::Integration),
                termination_system.in_set(SimulationSet::Termination),
                (telemetry_system, finish_telemetry_system)
                    .chain()
                    .in_set(SimulationSet::Telemetry),
            ),
        );

        // 4. Keyboard is optional; headless hosts feed the channel instead
        app.add_systems(
            PreUpdate,
            keyboard_control_system
                .after(bevy::input::InputSystem)
                .run_if(resource_exists::<ButtonInput<KeyCode>>),
        );

        info!(
            "Lateral simulation at {} Hz, {} airframe",
            self.config.tick_rate,
            self.airframe.wing_configuration()
        );
    }
}
