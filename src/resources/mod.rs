mod config;
mod simulation;
mod telemetry;

pub use config::{AirframeConfigBuilder, SimulationConfig};
pub use simulation::{
    simulation_running, SimulationClock, SimulationEnded, SimulationStatus, StepCompleted,
};
pub use telemetry::{
    latest_telemetry_file, TelemetryLog, TelemetrySeries, TelemetrySummary, TelemetryWriter,
};
