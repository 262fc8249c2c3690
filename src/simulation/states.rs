//! Core value types for the curve simulation.
//!
//! - `NVec2`    2D vector used for control points, positions and forces
//! - `OdeState` integrator state `[s, v]`: curve parameter and its rate
//!
//! `VectorExt` adds the handful of vector operations nalgebra does not
//! provide under the names the curve code uses.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;
pub type OdeState = Vector2<f64>;

/// Extra 2D vector operations on top of nalgebra
pub trait VectorExt {
    /// Vector with length `r` and polar angle `theta`
    fn from_polar(r: f64, theta: f64) -> Self;
    /// Projection of `v` onto `self`
    fn proj(&self, v: &Self) -> Self;
    /// Unit vector (no zero-length guard)
    fn unit(&self) -> Self;
    /// Unsigned angle between `self` and `v`, in radians
    fn angle_to(&self, v: &Self) -> f64;
    /// Polar angle in (-pi, pi]
    fn polar_angle(&self) -> f64;
}

impl VectorExt for NVec2 {
    fn from_polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        NVec2::new(r * cos, r * sin)
    }

    fn proj(&self, v: &Self) -> Self {
        *self * (self.dot(v) / self.norm_squared())
    }

    fn unit(&self) -> Self {
        *self / self.norm()
    }

    fn angle_to(&self, v: &Self) -> f64 {
        (self.dot(v) / (self.norm() * v.norm())).acos()
    }

    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn from_polar_round_trips_angle() {
        let v = NVec2::from_polar(2.0, FRAC_PI_4);
        assert_relative_eq!(v.norm(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(v.polar_angle(), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn proj_onto_axis_keeps_component() {
        let axis = NVec2::new(2.0, 0.0);
        let p = axis.proj(&NVec2::new(3.0, 5.0));
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_perpendicular_vectors() {
        let a = NVec2::new(1.0, 0.0);
        let b = NVec2::new(0.0, -4.0);
        assert_relative_eq!(a.angle_to(&b), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(b.unit().norm(), 1.0, epsilon = 1e-12);
    }
}
