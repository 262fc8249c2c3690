//! Error taxonomy for curve construction, editing and motion evaluation.

use thiserror::Error;

use crate::simulation::curve::CurveKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{kind:?} curve needs at least {min} control points, got {found}")]
    TooFewControlPoints { kind: CurveKind, min: usize, found: usize },
    #[error("control point index {index} out of range for {len} points")]
    PointIndex { index: usize, len: usize },
    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
    #[error("max frame length must be positive and finite, got {0}")]
    InvalidFrameLength(f64),
    #[error("tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f64),
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("curve tangent vanishes at s = {s}")]
    DegenerateTangent { s: f64 },
    #[error("particle sits on the attraction centre at s = {s}")]
    AtAttractionCenter { s: f64 },
    #[error("a run is already in progress")]
    AlreadyRunning,
    #[error("curve cannot be edited while a run is in progress")]
    EditWhileRunning,
}
