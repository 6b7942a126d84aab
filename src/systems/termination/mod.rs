use bevy::prelude::*;

use crate::components::LateralState;
use crate::resources::{SimulationClock, SimulationConfig, SimulationEnded, SimulationStatus};

/// Applies the post-step safety checks and stops the run on the first one
/// that fires.
pub fn termination_system(
    config: Res<SimulationConfig>,
    clock: Res<SimulationClock>,
    mut status: ResMut<SimulationStatus>,
    query: Query<&LateralState>,
    mut ended: EventWriter<SimulationEnded>,
) {
    let Ok(state) = query.get_single() else {
        return;
    };

    if let Some(reason) = config.termination.evaluate(state) {
        if status.terminate(reason) {
            warn!("Simulation terminated at t={:.3}s: {}", clock.elapsed(), reason);
            ended.send(SimulationEnded {
                reason,
                elapsed: clock.elapsed(),
            });
        }
    }
}
