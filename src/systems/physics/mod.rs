mod integrator;

pub use integrator::{
    lateral_integrator_system, rk4_step, step, EquationsOfMotion, LateralDynamics, StepOutput,
};
