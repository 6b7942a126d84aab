use dihedral::{
    components::LateralState,
    resources::{latest_telemetry_file, TelemetryLog, TelemetryWriter},
};
use tempfile::tempdir;

use crate::common::{create_reference_config, TestAppBuilder};

#[test]
fn test_one_line_per_tick() {
    let dir = tempdir().unwrap();
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_telemetry_dir(dir.path())
        .build();
    app.run_ticks(30);

    let path = app
        .get_resource::<TelemetryWriter>()
        .expect("telemetry enabled")
        .path()
        .to_path_buf();
    assert_eq!(latest_telemetry_file(dir.path()).unwrap(), Some(path.clone()));

    let log = TelemetryLog::load(&path).unwrap();
    assert_eq!(log.len(), 30);

    let last = log.records()[29];
    let state = app.state();
    assert_eq!(last.x, state.x);
    assert_eq!(last.bank, state.bank);
    assert!((last.elapsed - 0.5).abs() < 1e-12);
}

#[test]
fn test_terminating_step_is_recorded() {
    let dir = tempdir().unwrap();
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_telemetry_dir(dir.path())
        .build();
    app.run_ticks(5);
    app.set_state(LateralState::perturbed(95.0));
    assert!(app.run_until_terminated(1).is_some());
    app.run_ticks(5);

    let path = latest_telemetry_file(dir.path()).unwrap().unwrap();
    let log = TelemetryLog::load(path).unwrap();
    assert_eq!(log.len(), 6);

    let summary = log.summary().unwrap();
    assert!(summary.peak_bank > 90.0);
    assert_eq!(summary.final_bank, summary.peak_bank);
}

#[test]
fn test_no_directory_no_telemetry() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.run_ticks(5);
    assert!(app.get_resource::<TelemetryWriter>().is_none());
}
