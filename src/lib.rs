pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{NVec2, OdeState, VectorExt};
pub use simulation::error::SimError;
pub use simulation::bezier::PolynomialCurve;
pub use simulation::spline::NaturalCubicSpline;
pub use simulation::curve::{Curve, CurveKind};
pub use simulation::params::{MotionContext, Potential};
pub use simulation::forces::MotionModel;
pub use simulation::integrator::{euler_step, rk4_step, Integrator, OdeSystem, Scheme};
pub use simulation::engine::{RunState, Simulation, SimulationConfig, StopReason};
pub use simulation::scenario::Scenario;

pub use configuration::config::{CurveConfig, EngineConfig, MotionConfig, PotentialConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_curves, bench_integrators};
