//! Editable parametric curves the particle runs along
//!
//! [`Curve`] is a tagged variant over the two supported families and
//! forwards evaluation to them. All curves are parameterized over
//! `t ∈ [0, 1]`; callers clamp `t`, evaluation does not.

use log::debug;
use serde::Deserialize;

use crate::simulation::bezier::PolynomialCurve;
use crate::simulation::error::SimError;
use crate::simulation::spline::NaturalCubicSpline;
use crate::simulation::states::NVec2;

/// Minimum number of control points for either family
pub const MIN_CONTROL_POINTS: usize = 2;

/// Which curve family to build
/// `kind: "polynomial"` or `kind: "natural_spline"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    #[serde(rename = "polynomial")] // single Bezier curve in the Bernstein basis
    Polynomial,

    #[serde(rename = "natural_spline")] // piecewise cubic interpolating every point
    NaturalSpline,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Polynomial(PolynomialCurve),
    NaturalSpline(NaturalCubicSpline),
}

impl Curve {
    /// Build a curve of the given family from its control points.
    pub fn create(kind: CurveKind, points: Vec<NVec2>) -> Result<Self, SimError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(SimError::TooFewControlPoints {
                kind,
                min: MIN_CONTROL_POINTS,
                found: points.len(),
            });
        }
        debug!("building {:?} curve from {} control points", kind, points.len());
        Ok(match kind {
            CurveKind::Polynomial => Curve::Polynomial(PolynomialCurve::new(points)),
            CurveKind::NaturalSpline => Curve::NaturalSpline(NaturalCubicSpline::new(points)),
        })
    }

    /// Straight curve of the given order: `order + 1` control points evenly
    /// spaced from `start` to `end`. This is the editor's starting shape.
    pub fn linear(kind: CurveKind, order: usize, start: NVec2, end: NVec2) -> Result<Self, SimError> {
        let delta = end - start;
        let points = (0..=order)
            .map(|i| start + delta * (i as f64 / order.max(1) as f64))
            .collect::<Vec<_>>();
        // order 0 yields a single point and is rejected by `create`
        Self::create(kind, points)
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Polynomial(_) => CurveKind::Polynomial,
            Curve::NaturalSpline(_) => CurveKind::NaturalSpline,
        }
    }

    pub fn points(&self) -> &[NVec2] {
        match self {
            Curve::Polynomial(c) => c.points(),
            Curve::NaturalSpline(c) => c.points(),
        }
    }

    /// Number of control points minus one
    pub fn order(&self) -> usize {
        self.points().len() - 1
    }

    /// Replace one control point. Derived data is stale until [`Curve::update`].
    pub fn replace_point(&mut self, index: usize, point: NVec2) -> Result<(), SimError> {
        let points = match self {
            Curve::Polynomial(c) => c.points_mut(),
            Curve::NaturalSpline(c) => c.points_mut(),
        };
        let len = points.len();
        let slot = points.get_mut(index).ok_or(SimError::PointIndex { index, len })?;
        *slot = point;
        Ok(())
    }

    /// Replace a control point and rebuild derived data in one go
    pub fn set_point(&mut self, index: usize, point: NVec2) -> Result<(), SimError> {
        self.replace_point(index, point)?;
        self.update();
        Ok(())
    }

    /// Recompute derived coefficients after control points changed
    pub fn update(&mut self) {
        match self {
            Curve::Polynomial(c) => c.update(),
            Curve::NaturalSpline(c) => c.update(),
        }
    }

    /// Position at parameter `t`
    pub fn f(&self, t: f64) -> NVec2 {
        match self {
            Curve::Polynomial(c) => c.f(t),
            Curve::NaturalSpline(c) => c.f(t),
        }
    }

    /// First derivative with respect to `t`
    pub fn d(&self, t: f64) -> NVec2 {
        match self {
            Curve::Polynomial(c) => c.d(t),
            Curve::NaturalSpline(c) => c.d(t),
        }
    }

    /// Second derivative with respect to `t`
    pub fn dd(&self, t: f64) -> NVec2 {
        match self {
            Curve::Polynomial(c) => c.dd(t),
            Curve::NaturalSpline(c) => c.dd(t),
        }
    }

    /// `steps + 1` evenly spaced positions from t = 0 to t = 1, for drawing
    pub fn sample(&self, steps: usize) -> Vec<NVec2> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.f(i as f64 / steps as f64))
            .collect()
    }
}
