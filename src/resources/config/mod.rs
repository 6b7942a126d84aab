mod builder;
mod simulation;

pub use builder::AirframeConfigBuilder;
pub use simulation::SimulationConfig;
