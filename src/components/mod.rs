pub mod air_data;
pub mod airframe;
pub mod control;
pub mod state;
pub mod termination;

pub use air_data::AirData;
pub use airframe::{Airframe, AirframeConfig, AmbientAir, WingConfiguration, WingSide};
pub use control::{
    AutopilotConfig, ControlCommand, ControlSampling, ControlState, SaturationPolicy,
};
pub use state::{LateralState, TelemetryRecord};
pub use termination::{TerminationPolicy, TerminationReason, WorldBounds};
