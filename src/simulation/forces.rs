//! Equation of motion for a particle constrained to a curve
//!
//! The state is `y = [s, v]`: curve parameter and its rate. Requiring the
//! particle to stay on the curve `B(s)` and projecting the potential force on
//! the tangent `B'(s)` gives
//!
//! ```text
//! s'' = -( B'·B'' v^2 + B'·G(s) ) / |B'|^2
//! ```
//!
//! where `G` is the field term of the potential: `[0, g]` for linear
//! gravity and `g r / |r|^(3/2)` with `r = B(s) - center` for the central
//! potential.

use crate::simulation::error::SimError;
use crate::simulation::integrator::OdeSystem;
use crate::simulation::params::{MotionContext, Potential};
use crate::simulation::states::{NVec2, OdeState};

/// Curve geometry sampled at one parameter value
struct Frame {
    b: NVec2,   // position B(s)
    bd: NVec2,  // tangent B'(s)
    bdd: NVec2, // B''(s)
    bd2: f64,   // |B'(s)|^2
}

/// Right-hand side of the constrained motion plus the matching reaction force
#[derive(Debug, Clone)]
pub struct MotionModel {
    pub context: MotionContext,
}

impl MotionModel {
    pub fn new(context: MotionContext) -> Self {
        Self { context }
    }

    fn frame(&self, s: f64) -> Result<Frame, SimError> {
        let curve = &self.context.curve;
        let bd = curve.d(s);
        let bd2 = bd.norm_squared();
        if bd2 == 0.0 {
            return Err(SimError::DegenerateTangent { s });
        }
        Ok(Frame {
            b: curve.f(s),
            bd,
            bdd: curve.dd(s),
            bd2,
        })
    }

    /// Field term `G(s)` of the active potential
    fn field(&self, s: f64, frame: &Frame) -> Result<NVec2, SimError> {
        match self.context.potential {
            Potential::Linear { g } => Ok(NVec2::new(0.0, g)),
            Potential::Central { g, center } => {
                let r = frame.b - center;
                let r_norm = r.norm();
                if r_norm == 0.0 {
                    return Err(SimError::AtAttractionCenter { s });
                }
                // exponent 3/2 on the distance, not 3
                Ok(r * (g / r_norm.powf(1.5)))
            }
        }
    }

    /// Tangential acceleration `s''` for the given state
    pub fn acceleration(&self, y: &OdeState) -> Result<f64, SimError> {
        let (s, v) = (y[0], y[1]);
        let frame = self.frame(s)?;
        let field = self.field(s, &frame)?;
        Ok(tangential(&frame, &field, v))
    }

    /// Force vector reported to the renderer for the given state:
    /// `m (B'' v^2 + B' s'' + G)`
    pub fn reaction_force(&self, y: &OdeState) -> Result<NVec2, SimError> {
        let (s, v) = (y[0], y[1]);
        let frame = self.frame(s)?;
        let field = self.field(s, &frame)?;
        let a = tangential(&frame, &field, v);
        Ok((frame.bdd * (v * v) + frame.bd * a + field) * self.context.mass)
    }
}

fn tangential(frame: &Frame, field: &NVec2, v: f64) -> f64 {
    -(frame.bd.dot(&frame.bdd) * v * v + frame.bd.dot(field)) / frame.bd2
}

impl OdeSystem for MotionModel {
    type Error = SimError;

    fn derivative(&self, _t: f64, y: &OdeState) -> Result<OdeState, SimError> {
        Ok(OdeState::new(y[1], self.acceleration(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::curve::{Curve, CurveKind};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn model(curve: Curve, potential: Potential) -> MotionModel {
        MotionModel::new(MotionContext {
            curve: Arc::new(curve),
            mass: 2.0,
            potential,
        })
    }

    fn diagonal() -> Curve {
        Curve::linear(CurveKind::Polynomial, 1, NVec2::zeros(), NVec2::new(100.0, 100.0)).unwrap()
    }

    #[test]
    fn linear_gravity_on_incline() {
        let m = model(diagonal(), Potential::Linear { g: -9.8 });
        // -(g * bd.y) / |bd|^2 with bd = (100, 100)
        let a = m.acceleration(&OdeState::new(0.3, 0.0)).unwrap();
        assert_relative_eq!(a, 9.8 * 100.0 / 20_000.0, epsilon = 1e-15);
    }

    #[test]
    fn reaction_force_is_normal_to_a_straight_track() {
        let m = model(diagonal(), Potential::Linear { g: -9.8 });
        let y = OdeState::new(0.5, 0.7);
        let force = m.reaction_force(&y).unwrap();
        let tangent = diagonal().d(0.5);
        assert_relative_eq!(force.dot(&tangent), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn central_force_uses_three_halves_exponent() {
        // horizontal line y = 0, centre straight ahead at x = 200
        let line = Curve::linear(CurveKind::Polynomial, 1, NVec2::zeros(), NVec2::new(100.0, 0.0)).unwrap();
        let center = NVec2::new(200.0, 0.0);
        let m = model(line, Potential::Central { g: 50.0, center });
        let a = m.acceleration(&OdeState::new(0.0, 0.0)).unwrap();
        // r = (-200, 0), bd = (100, 0)
        let expected = -(50.0 * (100.0 * -200.0) / 200f64.powf(1.5)) / 10_000.0;
        assert_relative_eq!(a, expected, epsilon = 1e-12);
        assert!(a > 0.0, "positive coefficient attracts towards the centre");
    }

    #[test]
    fn degenerate_tangent_is_reported() {
        let p = NVec2::new(5.0, 5.0);
        let m = model(
            Curve::create(CurveKind::Polynomial, vec![p, p]).unwrap(),
            Potential::Linear { g: -9.8 },
        );
        assert_eq!(
            m.derivative(0.0, &OdeState::new(0.2, 0.0)),
            Err(SimError::DegenerateTangent { s: 0.2 })
        );
    }

    #[test]
    fn central_reaction_force_keeps_the_radial_term() {
        // straight track along x, centre 50 above the start; mass 2 from `model`
        let line = Curve::linear(CurveKind::Polynomial, 1, NVec2::zeros(), NVec2::new(100.0, 0.0)).unwrap();
        let center = NVec2::new(0.0, 50.0);
        let m = model(line, Potential::Central { g: 10.0, center });

        let force = m.reaction_force(&OdeState::new(0.0, 0.0)).unwrap();
        let expected = NVec2::new(0.0, -50.0) * (2.0 * 10.0 / 50f64.powf(1.5));
        assert_relative_eq!(force.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(force.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(force.y, -2.828_427_124_746_190_3, epsilon = 1e-12);

        // off-axis: the tangential part cancels, the normal part stays radial
        let force = m.reaction_force(&OdeState::new(0.5, 0.3)).unwrap();
        let r = NVec2::new(50.0, -50.0);
        assert_relative_eq!(force.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(force.y, 2.0 * 10.0 * r.y / r.norm().powf(1.5), epsilon = 1e-12);
    }

    #[test]
    fn particle_on_the_centre_is_reported() {
        let m = model(diagonal(), Potential::Central { g: 1.0, center: NVec2::zeros() });
        assert_eq!(
            m.acceleration(&OdeState::new(0.0, 0.0)),
            Err(SimError::AtAttractionCenter { s: 0.0 })
        );
    }
}
