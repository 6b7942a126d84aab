use nalgebra::Vector2;

use super::{
    angle_of_attack, check_stall, side_drag, sideslip_angle, vertical_drag, weight, wing_lift,
    wing_torque, PerWing,
};
use crate::components::{Airframe, WingSide};
use crate::utils::{deg_to_rad, SimulationFault};

/// Everything the force model produces for one kinematic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroLoads {
    /// Angle of attack of each wing after any constant-altitude trim (degrees).
    pub aoa: PerWing<f64>,
    /// Lift of each wing as (horizontal, vertical) force (N).
    pub lift: PerWing<Vector2<f64>>,
    /// Angle of attack added to both wings by constant-altitude trim (degrees).
    pub trim_increment: f64,
    /// Direction of the lateral-plane velocity (degrees).
    pub sideslip: f64,
    /// Net force (N).
    pub force: Vector2<f64>,
    /// Net aerodynamic torque, control input excluded (N·m).
    pub torque: f64,
}

/// Evaluates the force and torque model at sideslip rate `vss` (m/s),
/// vertical rate `vy` (m/s), bank angle `bank` (degrees) and roll rate `w`
/// (deg/s).
///
/// With constant altitude enabled, one trim correction is solved and applied
/// equally to both wings, then the loads are rebuilt. The trimmed angles are
/// checked against the stall angle again.
pub fn aero_loads(
    airframe: &Airframe,
    vss: f64,
    vy: f64,
    bank: f64,
    w: f64,
) -> Result<AeroLoads, SimulationFault> {
    let aoa = PerWing {
        left: angle_of_attack(airframe, WingSide::Left, vss, vy, bank, w)?,
        right: angle_of_attack(airframe, WingSide::Right, vss, vy, bank, w)?,
    };

    let loads = assemble(airframe, vss, vy, bank, aoa, 0.0);
    if !airframe.constant_altitude() {
        return Ok(loads);
    }

    let increment = constant_altitude_trim(airframe, bank, loads.force.y);
    let trimmed = PerWing {
        left: check_stall(airframe, WingSide::Left, aoa.left + increment)?,
        right: check_stall(airframe, WingSide::Right, aoa.right + increment)?,
    };
    Ok(assemble(airframe, vss, vy, bank, trimmed, increment))
}

/// Net (Fx, Fy) from weight, both wings' lift and body drag.
pub fn net_force(
    airframe: &Airframe,
    vss: f64,
    vy: f64,
    bank: f64,
    w: f64,
) -> Result<Vector2<f64>, SimulationFault> {
    aero_loads(airframe, vss, vy, bank, w).map(|loads| loads.force)
}

/// Sum of both wings' lift torques. Positive rolls right, reducing bank.
pub fn net_torque(
    airframe: &Airframe,
    vss: f64,
    vy: f64,
    bank: f64,
    w: f64,
) -> Result<f64, SimulationFault> {
    aero_loads(airframe, vss, vy, bank, w).map(|loads| loads.torque)
}

/// Angle of attack increment (degrees) that, added to both wings, cancels
/// `vertical_force` at bank angle `bank`. Zero when the wings are edge-on.
pub fn constant_altitude_trim(airframe: &Airframe, bank: f64, vertical_force: f64) -> f64 {
    let dihedral = airframe.dihedral();
    let verticality = deg_to_rad(WingSide::Left.tilt(bank, dihedral)).cos()
        + deg_to_rad(WingSide::Right.tilt(bank, dihedral)).cos();
    let lift_per_degree =
        airframe.wing_lift_per_coefficient() * airframe.config().lift_slope * verticality;

    if lift_per_degree.abs() < f64::EPSILON {
        return 0.0;
    }
    -vertical_force / lift_per_degree
}

fn assemble(
    airframe: &Airframe,
    vss: f64,
    vy: f64,
    bank: f64,
    aoa: PerWing<f64>,
    trim_increment: f64,
) -> AeroLoads {
    let lift = PerWing {
        left: wing_lift(airframe, WingSide::Left, bank, aoa.left),
        right: wing_lift(airframe, WingSide::Right, bank, aoa.right),
    };

    let force = weight(airframe)
        + lift.left
        + lift.right
        + side_drag(airframe, vss)
        + vertical_drag(airframe, vy);
    let torque = wing_torque(airframe, WingSide::Left, &lift.left)
        + wing_torque(airframe, WingSide::Right, &lift.right);

    AeroLoads {
        aoa,
        lift,
        trim_increment,
        sideslip: sideslip_angle(vss, vy),
        force,
        torque,
    }
}
