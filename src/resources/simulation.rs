use bevy::prelude::*;

use crate::components::{TelemetryRecord, TerminationReason};

/// Whether the run is still being stepped.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum SimulationStatus {
    #[default]
    Running,
    Terminated(TerminationReason),
}

impl SimulationStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationStatus::Running)
    }

    pub fn reason(&self) -> Option<&TerminationReason> {
        match self {
            SimulationStatus::Running => None,
            SimulationStatus::Terminated(reason) => Some(reason),
        }
    }

    /// Marks the run finished. Returns false if it already was, so the first
    /// reason wins.
    pub fn terminate(&mut self, reason: TerminationReason) -> bool {
        if !self.is_running() {
            return false;
        }
        *self = SimulationStatus::Terminated(reason);
        true
    }
}

/// Run condition for everything that advances the simulation.
pub fn simulation_running(status: Res<SimulationStatus>) -> bool {
    status.is_running()
}

/// Simulated time, counted in whole ticks so elapsed time does not drift.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    dt: f64,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, ticks: 0 }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.dt
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
    }
}

/// Fired after every successful integration step.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct StepCompleted(pub TelemetryRecord);

/// Fired once, when the run terminates for any reason.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SimulationEnded {
    pub reason: TerminationReason,
    pub elapsed: f64,
}
