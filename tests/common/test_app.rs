use bevy::prelude::*;
use dihedral::{
    components::{
        AirData, AirframeConfig, ControlCommand, ControlSampling, ControlState, LateralState,
        TerminationReason,
    },
    plugins::LateralSimPlugin,
    resources::{SimulationClock, SimulationConfig, SimulationEnded, SimulationStatus},
    systems::ControlSender,
};
use std::path::PathBuf;

/// Builder for a headless simulation app whose ticks are driven by hand.
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_airframe(mut self, airframe: AirframeConfig) -> Self {
        self.config.airframe = airframe;
        self
    }

    pub fn with_initial_bank(mut self, bank: f64) -> Self {
        self.config.initial_bank = bank;
        self
    }

    pub fn with_sampling(mut self, sampling: ControlSampling) -> Self {
        self.config.sampling = sampling;
        self
    }

    pub fn with_telemetry_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.telemetry_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> TestApp {
        let plugin = LateralSimPlugin::new(self.config).expect("test config must be valid");

        // No TimePlugin: FixedUpdate only runs when a test asks for a tick.
        let mut app = App::new();
        app.add_plugins(plugin);

        // Run Startup once to spawn the aircraft
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs one fixed simulation tick.
    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Ticks until the run terminates or `max_ticks` pass.
    pub fn run_until_terminated(&mut self, max_ticks: usize) -> Option<TerminationReason> {
        for _ in 0..max_ticks {
            self.tick();
            if let Some(reason) = self.status().reason() {
                return Some(*reason);
            }
        }
        None
    }

    pub fn state(&mut self) -> LateralState {
        *self.query_single::<LateralState>().expect("aircraft not spawned")
    }

    /// Overwrites the aircraft state, as if injected by an external driver.
    pub fn set_state(&mut self, state: LateralState) {
        *self
            .query_single_mut::<LateralState>()
            .expect("aircraft not spawned") = state;
    }

    pub fn air_data(&mut self) -> AirData {
        self.query_single::<AirData>()
            .expect("aircraft not spawned")
            .clone()
    }

    pub fn status(&self) -> SimulationStatus {
        *self.app.world().resource::<SimulationStatus>()
    }

    pub fn control(&self) -> ControlState {
        *self.app.world().resource::<ControlState>()
    }

    pub fn clock(&self) -> SimulationClock {
        *self.app.world().resource::<SimulationClock>()
    }

    pub fn send(&self, command: ControlCommand) {
        let sender = self.app.world().resource::<ControlSender>();
        assert!(sender.send(command), "control channel closed");
    }

    /// Every `SimulationEnded` fired so far.
    pub fn ended_events(&self) -> Vec<SimulationEnded> {
        let events = self.app.world().resource::<Events<SimulationEnded>>();
        events.get_cursor().read(events).copied().collect()
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
