use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::{env, io::BufRead, path::PathBuf, thread, time::Duration};

use dihedral::{
    components::ControlCommand,
    plugins::LateralSimPlugin,
    resources::{SimulationConfig, SimulationEnded},
    systems::ControlSender,
};

/// Usage: `dihedral_sim [config.yaml]`
///
/// Type `a`, `d` or `p` followed by Enter to nudge the ailerons or toggle the
/// autopilot.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig {
            telemetry_dir: Some(PathBuf::from("telemetry")),
            ..Default::default()
        },
    };

    let plugin = LateralSimPlugin::new(config)?;
    let tick = Duration::from_secs_f64(plugin.config().timestep());

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(tick)),
        LogPlugin::default(),
        plugin,
    ))
    .add_systems(Update, exit_on_simulation_end);

    let sender = app.world().resource::<ControlSender>().clone();
    spawn_stdin_listener(sender);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("simulation aborted (exit code {})", code).into()),
    }
}

/// Reads key presses from stdin on its own thread and forwards them to the
/// simulation. Ends with stdin or when the simulation stops listening.
fn spawn_stdin_listener(sender: ControlSender) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            for command in line.chars().filter_map(ControlCommand::from_key) {
                if !sender.send(command) {
                    return;
                }
            }
        }
    });
}

fn exit_on_simulation_end(mut ended: EventReader<SimulationEnded>, mut exit: EventWriter<AppExit>) {
    if let Some(event) = ended.read().next() {
        if event.reason.is_normal() {
            exit.send(AppExit::Success);
        } else {
            exit.send(AppExit::error());
        }
    }
}
