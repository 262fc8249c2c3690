pub mod states;
pub mod error;
pub mod bezier;
pub mod spline;
pub mod curve;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
