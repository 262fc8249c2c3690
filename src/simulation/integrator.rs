//! Fixed-step ODE integrators for the 1-DOF constrained particle
//!
//! Provides explicit Euler and classical 4th-order Runge–Kutta steps, driven
//! by any [`OdeSystem`] right-hand side `y' = f(t, y)`, and an [`Integrator`]
//! that owns the clock and state and advances them to a target time.

use std::convert::Infallible;

use log::debug;
use serde::Deserialize;

use super::error::SimError;
use super::states::OdeState;

/// Right-hand side of `y' = f(t, y)`
///
/// Errors are passed through `step`/`integrate` untouched; the integrator
/// never inspects them.
pub trait OdeSystem {
    type Error;
    fn derivative(&self, t: f64, y: &OdeState) -> Result<OdeState, Self::Error>;
}

impl<F> OdeSystem for F
where
    F: Fn(f64, &OdeState) -> OdeState,
{
    type Error = Infallible;

    fn derivative(&self, t: f64, y: &OdeState) -> Result<OdeState, Infallible> {
        Ok(self(t, y))
    }
}

/// Which integration scheme advances the state
/// `integrator: "euler"` or `integrator: "rk4"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[serde(rename = "euler")] // explicit Euler, first order, one RHS call per step
    #[default]
    Euler,

    #[serde(rename = "rk4")] // classical Runge–Kutta, fourth order, four RHS calls per step
    Rk4,
}

/// One explicit Euler step: y_n+1 = y_n + h f(t_n, y_n)
pub fn euler_step<S: OdeSystem>(sys: &S, t: f64, y: &OdeState, h: f64) -> Result<OdeState, S::Error> {
    let k = sys.derivative(t, y)?;
    Ok(y + k * h)
}

/// One classical RK4 step
pub fn rk4_step<S: OdeSystem>(sys: &S, t: f64, y: &OdeState, h: f64) -> Result<OdeState, S::Error> {
    let half_h = 0.5 * h;

    let k1 = sys.derivative(t, y)?;
    let k2 = sys.derivative(t + half_h, &(y + k1 * half_h))?;
    let k3 = sys.derivative(t + half_h, &(y + k2 * half_h))?;
    let k4 = sys.derivative(t + h, &(y + k3 * h))?;

    // y_n+1 = y_n + h/6 (k1 + 2 k2 + 2 k3 + k4)
    Ok(y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0))
}

/// Integrator state: clock, state vector, step size and the RHS it drives
#[derive(Debug, Clone)]
pub struct Integrator<S> {
    pub time: f64,        // current time t
    pub state: OdeState,  // current state y(t)
    step_size: f64,
    scheme: Scheme,
    system: S,
}

impl<S: OdeSystem> Integrator<S> {
    /// New integrator at t = 0, y = 0
    pub fn new(scheme: Scheme, step_size: f64, system: S) -> Result<Self, SimError> {
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(SimError::InvalidStepSize(step_size));
        }
        debug!("new {:?} integrator, step size {}", scheme, step_size);
        Ok(Self {
            time: 0.0,
            state: OdeState::zeros(),
            step_size,
            scheme,
            system,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Advance by exactly `h` (which may be zero or negative)
    pub fn step(&mut self, h: f64) -> Result<(), S::Error> {
        self.state = match self.scheme {
            Scheme::Euler => euler_step(&self.system, self.time, &self.state, h)?,
            Scheme::Rk4 => rk4_step(&self.system, self.time, &self.state, h)?,
        };
        self.time += h;
        Ok(())
    }

    /// Advance to `target`: as many full steps as fit, then one step for the
    /// remainder. `time == target` exactly on success.
    pub fn integrate(&mut self, target: f64) -> Result<(), S::Error> {
        let n_steps = ((target - self.time) / self.step_size).floor().max(0.0) as u64;
        for _ in 0..n_steps {
            self.step(self.step_size)?;
        }
        self.step(target - self.time)?;
        // remove the rounding left over from summing the steps
        self.time = target;
        Ok(())
    }
}
