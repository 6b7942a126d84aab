use bevy::prelude::*;

use crate::resources::{SimulationEnded, StepCompleted, TelemetryWriter};

/// Appends one line per completed step. A write failure is logged and
/// telemetry is switched off for the rest of the run.
pub fn telemetry_system(
    mut commands: Commands,
    writer: Option<ResMut<TelemetryWriter>>,
    mut steps: EventReader<StepCompleted>,
) {
    let Some(mut writer) = writer else {
        steps.clear();
        return;
    };

    for StepCompleted(record) in steps.read() {
        if let Err(e) = writer.append(record) {
            error!(
                "Telemetry write to {} failed, disabling telemetry: {}",
                writer.path().display(),
                e
            );
            commands.remove_resource::<TelemetryWriter>();
            return;
        }
    }
}

/// Flushes the telemetry file when the run ends.
pub fn finish_telemetry_system(
    writer: Option<ResMut<TelemetryWriter>>,
    mut ended: EventReader<SimulationEnded>,
) {
    let Some(event) = ended.read().last() else {
        return;
    };

    info!("Run ended after {:.3}s: {}", event.elapsed, event.reason);
    if let Some(mut writer) = writer {
        match writer.flush() {
            Ok(()) => info!(
                "Telemetry saved to {} ({} records)",
                writer.path().display(),
                writer.records()
            ),
            Err(e) => error!("Failed to flush telemetry: {}", e),
        }
    }
}
