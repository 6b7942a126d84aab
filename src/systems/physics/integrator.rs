use bevy::prelude::*;
use nalgebra::Vector6;

use crate::components::{
    AirData, Airframe, ControlSampling, ControlState, LateralState, TerminationReason,
};
use crate::resources::{
    SimulationClock, SimulationConfig, SimulationEnded, SimulationStatus, StepCompleted,
};
use crate::systems::aerodynamics::{aero_loads, AeroLoads};
use crate::systems::controller::{control_torque, HeldCommand, RollControl, StageAutopilot};
use crate::utils::SimulationFault;

/// Right-hand side of a first-order ODE system `ṡ = f(s)`.
pub trait EquationsOfMotion {
    fn derivative(&mut self, state: &Vector6<f64>) -> Result<Vector6<f64>, SimulationFault>;
}

impl<F> EquationsOfMotion for F
where
    F: FnMut(&Vector6<f64>) -> Result<Vector6<f64>, SimulationFault>,
{
    fn derivative(&mut self, state: &Vector6<f64>) -> Result<Vector6<f64>, SimulationFault> {
        self(state)
    }
}

/// One classical fourth-order Runge-Kutta step of size `dt`.
///
/// Fixed step, no error control. A fault in any stage aborts the step.
pub fn rk4_step<E: EquationsOfMotion + ?Sized>(
    equations: &mut E,
    state: &Vector6<f64>,
    dt: f64,
) -> Result<Vector6<f64>, SimulationFault> {
    let half_dt = dt / 2.0;

    let k1 = equations.derivative(state)?;
    let k2 = equations.derivative(&(state + k1 * half_dt))?;
    let k3 = equations.derivative(&(state + k2 * half_dt))?;
    let k4 = equations.derivative(&(state + k3 * dt))?;

    Ok(state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
}

/// The three coupled second-order equations of lateral motion, reduced to
/// first order over `(x, ẋ, y, ẏ, bank, bank_rate)`.
pub struct LateralDynamics<'a> {
    airframe: &'a Airframe,
    control: &'a mut dyn RollControl,
    /// Loads at the first stage evaluated, i.e. at the start of the step.
    initial_loads: Option<AeroLoads>,
}

impl<'a> LateralDynamics<'a> {
    pub fn new(airframe: &'a Airframe, control: &'a mut dyn RollControl) -> Self {
        Self {
            airframe,
            control,
            initial_loads: None,
        }
    }
}

impl EquationsOfMotion for LateralDynamics<'_> {
    fn derivative(&mut self, s: &Vector6<f64>) -> Result<Vector6<f64>, SimulationFault> {
        let (x_rate, y_rate, bank, bank_rate) = (s[1], s[3], s[4], s[5]);

        let loads = aero_loads(self.airframe, x_rate, y_rate, bank, bank_rate)?;
        self.initial_loads.get_or_insert(loads);

        let torque = control_torque(loads.torque, self.control.stage_command(bank, bank_rate));
        let mass = self.airframe.mass();

        Ok(Vector6::new(
            x_rate,
            loads.force.x / mass,
            y_rate,
            loads.force.y / mass,
            bank_rate,
            // Positive torque rolls right, which reduces bank.
            -torque / self.airframe.roll_inertia(),
        ))
    }
}

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub state: LateralState,
    /// Loads acting at the start of the step.
    pub loads: AeroLoads,
}

/// Advances `state` by `dt` seconds. Deterministic for identical inputs.
pub fn step(
    state: &LateralState,
    dt: f64,
    airframe: &Airframe,
    control: &mut dyn RollControl,
) -> Result<StepOutput, SimulationFault> {
    let mut dynamics = LateralDynamics::new(airframe, control);
    let next = LateralState::from_vector(&rk4_step(&mut dynamics, &state.to_vector(), dt)?);

    if !next.is_finite() {
        return Err(SimulationFault::NonFiniteState(format!("{:?}", next)));
    }

    match dynamics.initial_loads {
        Some(loads) => Ok(StepOutput { state: next, loads }),
        None => Err(SimulationFault::NonFiniteState(
            "no stage was evaluated".to_string(),
        )),
    }
}

/// Steps the aircraft once per fixed tick. A fault ends the run.
#[allow(clippy::too_many_arguments)]
pub fn lateral_integrator_system(
    airframe: Res<Airframe>,
    config: Res<SimulationConfig>,
    mut control: ResMut<ControlState>,
    mut clock: ResMut<SimulationClock>,
    mut status: ResMut<SimulationStatus>,
    mut query: Query<(&mut LateralState, &mut AirData)>,
    mut completed: EventWriter<StepCompleted>,
    mut ended: EventWriter<SimulationEnded>,
) {
    let Ok((mut state, mut air_data)) = query.get_single_mut() else {
        return;
    };

    let result = if control.autopilot && config.sampling == ControlSampling::PerStage {
        let mut autopilot = StageAutopilot::new(config.autopilot, control.aileron);
        let result = step(&state, clock.dt(), &airframe, &mut autopilot);
        control.aileron = autopilot.command();
        result
    } else {
        step(&state, clock.dt(), &airframe, &mut HeldCommand(control.aileron))
    };

    match result {
        Ok(output) => {
            *state = output.state;
            clock.advance();
            air_data.refresh(&output.loads, &control);
            completed.send(StepCompleted(state.telemetry(clock.elapsed())));
        }
        Err(fault) => {
            error!("Simulation aborted at t={:.3}s: {}", clock.elapsed(), fault);
            let reason = TerminationReason::from(&fault);
            if status.terminate(reason) {
                ended.send(SimulationEnded {
                    reason,
                    elapsed: clock.elapsed(),
                });
            }
        }
    }
}
