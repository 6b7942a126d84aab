pub mod aerodynamics;
pub mod controller;
pub mod physics;
mod telemetry;
mod termination;

pub use aerodynamics::{aero_loads, net_force, net_torque, AeroLoads};
pub use controller::{
    apply_control_commands, autopilot_system, control_channel, keyboard_control_system,
    ControlInbox, ControlSender,
};
pub use physics::{lateral_integrator_system, step, StepOutput};
pub use telemetry::{finish_telemetry_system, telemetry_system};
pub use termination::termination_system;
