//! Tick-driven simulation driver
//!
//! Owns the active curve and run configuration, and advances a
//! [`MotionModel`] through an [`Integrator`] once per external animation
//! tick. Run lifecycle:
//!
//! ```text
//! Idle --start--> Running --stop / left curve / degenerate--> Stopped
//!   ^                                                            |
//!   +-------------- reset / edit control points -----------------+
//! ```
//!
//! Control points may only be edited while no run is in progress. A run
//! holds its own handle on the curve, so editing after a stop copies the
//! curve instead of touching the one the finished run saw.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::simulation::curve::{Curve, CurveKind};
use crate::simulation::error::SimError;
use crate::simulation::forces::MotionModel;
use crate::simulation::integrator::{Integrator, Scheme};
use crate::simulation::params::{MotionContext, Potential};
use crate::simulation::states::{NVec2, OdeState};

/// Longest wall-clock gap a single tick may integrate over (seconds)
pub const DEFAULT_MAX_FRAME_LENGTH: f64 = 10.0 / 60.0;

/// Run settings, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub mass: f64,
    pub potential: Potential,
    pub scheme: Scheme,
    pub step_size: f64,
    pub max_frame_length: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            potential: Potential::default(),
            scheme: Scheme::Euler,
            step_size: 0.01,
            max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    User,               // stop() was called
    LeftCurve,          // s left [0, 1]
    DegenerateGeometry, // vanishing tangent or particle on the attractor
    NonFinite,          // NaN or infinity in the state
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped(StopReason),
}

/// Per-run bookkeeping: integrator plus last force readout
struct Run {
    ode: Integrator<MotionModel>,
    clock_started: bool,      // integrator clock aligned to a tick yet
    force: Option<NVec2>,     // force at the current state, for rendering
}

pub struct Simulation {
    curve: Arc<Curve>,
    config: SimulationConfig,
    run: Option<Run>,
    run_state: RunState,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("curve", &self.curve.kind())
            .field("order", &self.curve.order())
            .field("config", &self.config)
            .field("run_state", &self.run_state)
            .field("time", &self.time())
            .field("y", &self.state())
            .finish()
    }
}

impl Simulation {
    pub fn new(curve: Curve, config: SimulationConfig) -> Self {
        Self {
            curve: Arc::new(curve),
            config,
            run: None,
            run_state: RunState::Idle,
        }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Change run settings; rejected while running
    pub fn configure(&mut self, config: SimulationConfig) -> Result<(), SimError> {
        if self.is_running() {
            return Err(SimError::EditWhileRunning);
        }
        self.config = config;
        Ok(())
    }

    /// Replace the curve with a straight one of the given family and order
    pub fn reset_linear(&mut self, kind: CurveKind, order: usize, start: NVec2, end: NVec2) -> Result<(), SimError> {
        let curve = Curve::linear(kind, order, start, end)?;
        self.reset(curve);
        Ok(())
    }

    /// Swap in a new curve wholesale and return to `Idle`
    pub fn reset(&mut self, curve: Curve) {
        if self.is_running() {
            info!("run interrupted by curve reset");
        }
        self.curve = Arc::new(curve);
        self.run = None;
        self.run_state = RunState::Idle;
    }

    /// Move one control point. Only allowed while no run is in progress.
    pub fn replace_point(&mut self, index: usize, point: NVec2) -> Result<(), SimError> {
        if self.is_running() {
            return Err(SimError::EditWhileRunning);
        }
        Arc::make_mut(&mut self.curve).set_point(index, point)?;
        self.run = None;
        self.run_state = RunState::Idle;
        Ok(())
    }

    /// Begin a run at s = 0, v = 0. The clock starts at the next tick.
    /// Rejected while a run is already in progress.
    pub fn start(&mut self) -> Result<(), SimError> {
        if self.is_running() {
            return Err(SimError::AlreadyRunning);
        }
        let cfg = &self.config;
        if !(cfg.mass.is_finite() && cfg.mass > 0.0) {
            return Err(SimError::InvalidMass(cfg.mass));
        }
        if !(cfg.max_frame_length.is_finite() && cfg.max_frame_length > 0.0) {
            return Err(SimError::InvalidFrameLength(cfg.max_frame_length));
        }
        let model = MotionModel::new(MotionContext {
            curve: Arc::clone(&self.curve),
            mass: cfg.mass,
            potential: cfg.potential,
        });
        let ode = Integrator::new(cfg.scheme, cfg.step_size, model)?;
        let force = ode.system().reaction_force(&ode.state).ok();

        info!(
            "run started: {:?} curve of order {}, {:?} step {}, {:?}",
            self.curve.kind(),
            self.curve.order(),
            cfg.scheme,
            cfg.step_size,
            cfg.potential
        );
        self.run = Some(Run { ode, clock_started: false, force });
        self.run_state = RunState::Running;
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.halt(StopReason::User);
        }
    }

    fn halt(&mut self, reason: StopReason) {
        info!("run stopped: {:?} at t = {:?}", reason, self.time());
        self.run_state = RunState::Stopped(reason);
    }

    /// Advance the run to `timestamp` (seconds). Gaps longer than
    /// `max_frame_length` only advance the simulation by that much.
    pub fn tick(&mut self, timestamp: f64) -> RunState {
        if !self.is_running() {
            return self.run_state;
        }
        let max_frame = self.config.max_frame_length;
        let Some(run) = self.run.as_mut() else {
            return self.run_state;
        };

        if !run.clock_started {
            run.ode.time = timestamp;
            run.clock_started = true;
        }
        let elapsed = timestamp - run.ode.time;
        if elapsed > max_frame {
            debug!("frame of {:.3} s clamped to {:.3} s", elapsed, max_frame);
            run.ode.time = timestamp - max_frame;
        }

        let outcome = run
            .ode
            .integrate(timestamp)
            .and_then(|()| run.ode.system().reaction_force(&run.ode.state));

        let y = run.ode.state;
        let stop = match outcome {
            Err(e) => {
                warn!("{}", e);
                run.force = None;
                Some(StopReason::DegenerateGeometry)
            }
            Ok(_) if !(y[0].is_finite() && y[1].is_finite()) => {
                warn!("non-finite state {:?} at t = {}", y, timestamp);
                run.force = None;
                Some(StopReason::NonFinite)
            }
            Ok(force) => {
                run.force = Some(force);
                if (0.0..=1.0).contains(&y[0]) {
                    None
                } else {
                    Some(StopReason::LeftCurve)
                }
            }
        };
        if let Some(reason) = stop {
            self.halt(reason);
        }
        self.run_state
    }

    /// Integrator state `[s, v]` of the current or last run
    pub fn state(&self) -> Option<OdeState> {
        self.run.as_ref().map(|r| r.ode.state)
    }

    /// Simulated time of the current or last run
    pub fn time(&self) -> Option<f64> {
        self.run.as_ref().map(|r| r.ode.time)
    }

    /// Particle position while the parameter is still on the curve
    pub fn position(&self) -> Option<NVec2> {
        let s = self.state()?[0];
        (0.0..=1.0).contains(&s).then(|| self.curve.f(s))
    }

    /// Reaction force at the current state, if it could be evaluated
    pub fn force(&self) -> Option<NVec2> {
        self.run.as_ref().and_then(|r| r.force)
    }
}
