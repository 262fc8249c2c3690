//! Build a ready-to-run simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! containing:
//! - the driver (`Simulation`) with its curve and run settings
//! - the headless tick schedule (`RunConfig`)

use crate::configuration::config::{CurveConfig, PotentialConfig, RunConfig, ScenarioConfig};
use crate::simulation::curve::Curve;
use crate::simulation::engine::{Simulation, SimulationConfig};
use crate::simulation::error::SimError;
use crate::simulation::params::Potential;
use crate::simulation::states::NVec2;

/// Fully-initialized scenario: a driver in `Idle` plus how to tick it
#[derive(Debug)]
pub struct Scenario {
    pub simulation: Simulation,
    pub run: RunConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let tick_rate = cfg.run.tick_rate;
        if !(tick_rate.is_finite() && tick_rate > 0.0) {
            return Err(SimError::InvalidTickRate(tick_rate));
        }
        let curve = build_curve(&cfg.curve)?;

        // Potential (runtime) from PotentialConfig
        let potential = match cfg.motion.potential {
            PotentialConfig::Linear { g } => Potential::Linear { g },
            PotentialConfig::Central { g, center } => Potential::Central {
                g,
                center: NVec2::from(center),
            },
        };

        let config = SimulationConfig {
            mass: cfg.motion.mass,
            potential,
            scheme: cfg.engine.integrator,
            step_size: cfg.engine.step_size,
            max_frame_length: cfg.engine.max_frame_length,
        };

        Ok(Self {
            simulation: Simulation::new(curve, config),
            run: cfg.run,
        })
    }
}

/// Explicit points win over a `linear` description
fn build_curve(cfg: &CurveConfig) -> Result<Curve, SimError> {
    match (&cfg.linear, cfg.points.is_empty()) {
        (Some(lin), true) => Curve::linear(cfg.kind, lin.order, NVec2::from(lin.start), NVec2::from(lin.end)),
        _ => Curve::create(cfg.kind, cfg.points.iter().copied().map(NVec2::from).collect()),
    }
}
