//! Physical parameters of a run
//!
//! `MotionContext` holds what the right-hand side reads:
//! - the curve the particle is constrained to (shared for the run),
//! - particle mass,
//! - the potential (uniform gravity along y, or a central attractor)

use std::sync::Arc;

use crate::simulation::curve::Curve;
use crate::simulation::states::NVec2;

/// Potential the particle moves in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Potential {
    /// Uniform field along the y-axis. The particle is pushed along
    /// `[0, -g]`, so with y growing downwards `g < 0` pulls down.
    Linear { g: f64 },
    /// Central field around `center`; `g > 0` attracts, `g < 0` repels
    Central { g: f64, center: NVec2 },
}

impl Default for Potential {
    fn default() -> Self {
        Potential::Linear { g: -9.8 }
    }
}

#[derive(Debug, Clone)]
pub struct MotionContext {
    pub curve: Arc<Curve>, // curve handle taken when the run started
    pub mass: f64,         // particle mass
    pub potential: Potential,
}
