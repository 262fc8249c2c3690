//! Bezier curves of arbitrary order in the Bernstein basis
//!
//! Position is the Bernstein-weighted sum of the control points. The first
//! and second derivatives are evaluated the same way on the hodograph
//! control points (forward differences), which are cached and rebuilt by
//! [`PolynomialCurve::update`].

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialCurve {
    points: Vec<NVec2>,    // control points, n + 1 of them
    dpoints: Vec<NVec2>,   // first differences, n of them
    ddpoints: Vec<NVec2>,  // second differences, n - 1 of them
}

impl PolynomialCurve {
    /// Build from at least two control points. The caller checks the count.
    pub(crate) fn new(points: Vec<NVec2>) -> Self {
        debug_assert!(points.len() >= 2);
        let mut curve = Self {
            points,
            dpoints: Vec::new(),
            ddpoints: Vec::new(),
        };
        curve.update();
        curve
    }

    /// Polynomial order n (number of control points minus one)
    pub fn order(&self) -> usize {
        self.points.len() - 1
    }

    pub fn points(&self) -> &[NVec2] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [NVec2] {
        &mut self.points
    }

    /// Rebuild the difference points from the current control points
    pub fn update(&mut self) {
        self.dpoints = self.points.windows(2).map(|w| w[1] - w[0]).collect();
        self.ddpoints = self.dpoints.windows(2).map(|w| w[1] - w[0]).collect();
    }

    pub fn f(&self, t: f64) -> NVec2 {
        bernstein_sum(&self.points, t)
    }

    pub fn d(&self, t: f64) -> NVec2 {
        let n = self.order() as f64;
        bernstein_sum(&self.dpoints, t) * n
    }

    /// Second derivative. For order 1 the difference list is empty and the
    /// n(n-1) prefactor is zero, so a straight line yields exactly zero.
    pub fn dd(&self, t: f64) -> NVec2 {
        let n = self.order() as f64;
        bernstein_sum(&self.ddpoints, t) * (n * (n - 1.0))
    }
}

/// sum_i B_i^(len-1)(t) * coeffs[i]
fn bernstein_sum(coeffs: &[NVec2], t: f64) -> NVec2 {
    let Some(n) = coeffs.len().checked_sub(1) else {
        return NVec2::zeros();
    };
    coeffs
        .iter()
        .enumerate()
        .fold(NVec2::zeros(), |acc, (i, p)| acc + p * bernstein(n, i, t))
}

/// Binomial coefficient C(n, k) as a running product of ratios, so the
/// intermediate values never exceed the result by more than a factor k.
pub fn binom(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}

/// Bernstein basis polynomial B_i^n(t)
pub fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    binom(n, i) * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn binom_matches_pascal_row() {
        let row: Vec<f64> = (0..=6).map(|k| binom(6, k)).collect();
        assert_eq!(row, vec![1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0]);
        assert_eq!(binom(3, 5), 0.0);
    }

    #[test]
    fn binom_stays_exact_for_large_orders() {
        assert_relative_eq!(binom(60, 30), 1.182_645_815_648_614_2e17, max_relative = 1e-12);
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for &t in &[0.0, 0.2, 0.5, 0.77, 1.0] {
            let sum: f64 = (0..=7).map(|i| bernstein(7, i, t)).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn quadratic_derivatives_match_closed_form() {
        // B(t) = (1-t)^2 p0 + 2t(1-t) p1 + t^2 p2
        let p0 = NVec2::new(0.0, 0.0);
        let p1 = NVec2::new(1.0, 2.0);
        let p2 = NVec2::new(3.0, 0.0);
        let curve = PolynomialCurve::new(vec![p0, p1, p2]);
        let t = 0.3;

        let d = (p1 - p0) * (2.0 * (1.0 - t)) + (p2 - p1) * (2.0 * t);
        let dd = (p2 - p1 * 2.0 + p0) * 2.0;

        assert_relative_eq!(curve.d(t).x, d.x, epsilon = 1e-12);
        assert_relative_eq!(curve.d(t).y, d.y, epsilon = 1e-12);
        assert_relative_eq!(curve.dd(t).x, dd.x, epsilon = 1e-12);
        assert_relative_eq!(curve.dd(t).y, dd.y, epsilon = 1e-12);
    }

    #[test]
    fn line_has_zero_second_derivative() {
        let curve = PolynomialCurve::new(vec![NVec2::new(1.0, 1.0), NVec2::new(4.0, -2.0)]);
        assert_eq!(curve.dd(0.4), NVec2::zeros());
        assert_relative_eq!(curve.d(0.4).x, 3.0, epsilon = 1e-12);
    }
}
