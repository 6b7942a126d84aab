mod autopilot;
mod input;

pub use autopilot::{
    aileron_torque, autopilot_command, control_torque, HeldCommand, RollControl, StageAutopilot,
};
pub use input::{
    apply_control_commands, autopilot_system, control_channel, keyboard_control_system,
    ControlInbox, ControlSender,
};
