use bevy::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};

use crate::components::{ControlCommand, ControlSampling, ControlState, LateralState};
use crate::resources::SimulationConfig;

use super::autopilot_command;

/// Consumer end of the control channel, drained once per tick.
#[derive(Resource)]
pub struct ControlInbox {
    receiver: Receiver<ControlCommand>,
}

/// Producer end of the control channel. Cheap to clone into input threads.
#[derive(Resource, Clone)]
pub struct ControlSender {
    sender: Sender<ControlCommand>,
}

impl ControlSender {
    /// Queues a command for the next tick. Returns false once the simulation
    /// has shut down and the inbox is gone.
    pub fn send(&self, command: ControlCommand) -> bool {
        match self.sender.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Disconnected(_)) => false,
            Err(TrySendError::Full(_)) => {
                warn!("Control channel full, dropping {:?}", command);
                false
            }
        }
    }
}

/// Creates a linked sender/inbox pair.
pub fn control_channel() -> (ControlSender, ControlInbox) {
    let (sender, receiver) = unbounded();
    (ControlSender { sender }, ControlInbox { receiver })
}

/// Applies every queued command to the control state, in arrival order.
pub fn apply_control_commands(inbox: Res<ControlInbox>, mut control: ResMut<ControlState>) {
    for command in inbox.receiver.try_iter() {
        debug!("Applying control command {:?}", command);
        control.apply(command);
    }
}

/// Samples the autopilot once per tick, before integration. With per-stage
/// sampling the integrator evaluates the law itself.
pub fn autopilot_system(
    config: Res<SimulationConfig>,
    mut control: ResMut<ControlState>,
    query: Query<&LateralState>,
) {
    if !control.autopilot || config.sampling != ControlSampling::PerTick {
        return;
    }

    if let Ok(state) = query.get_single() {
        control.aileron =
            autopilot_command(&config.autopilot, control.aileron, state.bank, state.bank_rate);
    }
}

/// Forwards A / D / P key presses onto the control channel.
pub fn keyboard_control_system(keyboard: Res<ButtonInput<KeyCode>>, sender: Res<ControlSender>) {
    let bindings = [
        (KeyCode::KeyA, ControlCommand::NudgeLeft),
        (KeyCode::KeyD, ControlCommand::NudgeRight),
        (KeyCode::KeyP, ControlCommand::ToggleAutopilot),
    ];

    for (key, command) in bindings {
        if keyboard.just_pressed(key) {
            sender.send(command);
        }
    }
}
