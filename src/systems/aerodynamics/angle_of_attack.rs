use crate::components::{Airframe, WingSide};
use crate::utils::{deg_to_rad, rad_to_deg, SimulationFault, StallCondition};

use super::wingtip_rotational_velocity;

/// Local angle of attack of one wing (degrees).
///
/// The sideslip rate `vss` and the vertical rate `vy` plus the wing's roll
/// induced velocity are projected onto the normal of the wing's tilted plane.
/// The resulting inflow angle against the cruise airflow is subtracted from
/// the trim angle of attack.
///
/// # Arguments
/// * `airframe` - Derived airframe constants.
/// * `side` - Which wing to evaluate.
/// * `vss` - Sideslip rate (m/s).
/// * `vy` - Vertical rate (m/s).
/// * `bank` - Bank angle (degrees).
/// * `w` - Roll rate (deg/s).
///
/// # Errors
/// [`SimulationFault::Stall`] when the magnitude of the resulting angle of
/// attack exceeds the airframe's stall angle.
pub fn angle_of_attack(
    airframe: &Airframe,
    side: WingSide,
    vss: f64,
    vy: f64,
    bank: f64,
    w: f64,
) -> Result<f64, SimulationFault> {
    let tilt = deg_to_rad(side.tilt(bank, airframe.dihedral()));
    let rotational = wingtip_rotational_velocity(airframe, w).get(side);

    let slip_component = -vss * tilt.sin();
    let heave_component = (vy + rotational) * tilt.cos();
    let deviation = rad_to_deg((heave_component + slip_component).atan2(airframe.cruise_speed()));

    check_stall(airframe, side, airframe.trim_aoa() - deviation)
}

/// Passes `aoa` through unless its magnitude exceeds the stall angle.
pub fn check_stall(airframe: &Airframe, side: WingSide, aoa: f64) -> Result<f64, SimulationFault> {
    if aoa.abs() > airframe.stall_angle() {
        return Err(SimulationFault::Stall(StallCondition {
            wing: side,
            angle_of_attack: aoa,
            threshold: airframe.stall_angle(),
        }));
    }

    Ok(aoa)
}

/// Direction of the lateral-plane velocity, `atan2(vy, vss)` (degrees).
pub fn sideslip_angle(vss: f64, vy: f64) -> f64 {
    rad_to_deg(vy.atan2(vss))
}
