//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`] – integrator scheme, step size, frame clamp
//! - [`MotionConfig`] – particle mass and potential
//! - [`CurveConfig`]  – curve family and control points
//! - [`RunConfig`]    – how the headless runner ticks the simulation
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "euler"
//!   step_size: 0.01         # fixed integration step (s)
//!   max_frame_length: 0.1667
//!
//! motion:
//!   mass: 1.0
//!   potential:
//!     kind: "linear"        # or "central"
//!     g: -9.8               # signed; y grows downwards on screen
//!
//! curve:
//!   kind: "polynomial"      # or "natural_spline"
//!   points:
//!     - [  50.0, 100.0 ]
//!     - [ 300.0, 500.0 ]
//!     - [ 550.0, 100.0 ]
//!
//! run:
//!   tick_rate: 60.0         # ticks per second
//!   t_end: 20.0             # give up after this much simulated time
//! ```
//!
//! Instead of `points`, a curve may be given as a straight line of some
//! order, the way the editor starts out:
//!
//! ```yaml
//! curve:
//!   kind: "natural_spline"
//!   linear: { order: 4, start: [50.0, 300.0], end: [750.0, 300.0] }
//! ```

use serde::Deserialize;

use crate::simulation::curve::CurveKind;
use crate::simulation::engine::DEFAULT_MAX_FRAME_LENGTH;
use crate::simulation::integrator::Scheme;

/// Integration settings
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub integrator: Scheme, // Time integrator used for advancing [s, v]
    pub step_size: f64,     // fixed step size
    #[serde(default = "default_max_frame_length")]
    pub max_frame_length: f64, // longest gap a single tick integrates over
}

fn default_max_frame_length() -> f64 {
    DEFAULT_MAX_FRAME_LENGTH
}

/// Potential the particle moves in
/// `kind: "linear"` needs `g`; `kind: "central"` needs `g` and `center`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum PotentialConfig {
    #[serde(rename = "linear")]
    Linear { g: f64 },

    #[serde(rename = "central")]
    Central { g: f64, center: [f64; 2] },
}

/// Particle properties
#[derive(Deserialize, Debug, Clone)]
pub struct MotionConfig {
    pub mass: f64,
    pub potential: PotentialConfig,
}

/// Straight initial curve, as the editor creates it
#[derive(Deserialize, Debug, Clone)]
pub struct LinearCurveConfig {
    pub order: usize,
    pub start: [f64; 2],
    pub end: [f64; 2],
}

/// Curve family and its control points (explicit or a straight line)
#[derive(Deserialize, Debug, Clone)]
pub struct CurveConfig {
    pub kind: CurveKind,
    #[serde(default)]
    pub points: Vec<[f64; 2]>,
    pub linear: Option<LinearCurveConfig>,
}

/// Headless runner settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub tick_rate: f64, // ticks per second
    pub t_end: f64,     // stop after this much time even if still on the curve
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub motion: MotionConfig,
    pub curve: CurveConfig,
    pub run: RunConfig,
}
