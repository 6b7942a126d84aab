mod angle_of_attack;
mod forces;
mod loads;

pub use angle_of_attack::{angle_of_attack, check_stall, sideslip_angle};
pub use forces::{
    side_drag, vertical_drag, weight, wing_lift, wing_torque, wingtip_rotational_velocity, PerWing,
};
pub use loads::{aero_loads, constant_altitude_trim, net_force, net_torque, AeroLoads};
