//! Natural cubic spline through every control point
//!
//! Each segment i is a cubic `A + B u + C u^2 + D u^3` on a local parameter
//! u in [0, 1]. The tangents at the knots come from the tridiagonal system
//!
//! ```text
//! | 2 1           | |r_0|   | 3 (p_1 - p_0)     |
//! | 1 4 1         | |r_1|   | 3 (p_2 - p_0)     |
//! |   . . .       | | . | = |        .          |
//! |       1 4 1   | | . |   | 3 (p_m - p_(m-2)) |
//! |         1 2   | |r_m|   | 3 (p_m - p_(m-1)) |
//! ```
//!
//! which gives zero curvature at both ends (natural boundary conditions).

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct NaturalCubicSpline {
    points: Vec<NVec2>,
    a: Vec<NVec2>,
    b: Vec<NVec2>,
    c: Vec<NVec2>,
    d: Vec<NVec2>,
}

impl NaturalCubicSpline {
    /// Build from at least two control points. The caller checks the count.
    pub(crate) fn new(points: Vec<NVec2>) -> Self {
        debug_assert!(points.len() >= 2);
        let mut spline = Self {
            points,
            a: Vec::new(),
            b: Vec::new(),
            c: Vec::new(),
            d: Vec::new(),
        };
        spline.update();
        spline
    }

    /// Number of cubic segments
    pub fn segments(&self) -> usize {
        self.points.len() - 1
    }

    pub fn points(&self) -> &[NVec2] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [NVec2] {
        &mut self.points
    }

    /// Re-solve the knot tangents and rebuild the segment coefficients
    pub fn update(&mut self) {
        let p = &self.points;
        let m = p.len() - 1;

        let mut sub = vec![1.0; m + 1];
        let mut diag = vec![4.0; m + 1];
        let mut sup = vec![1.0; m + 1];
        let mut rhs = vec![NVec2::zeros(); m + 1];

        sub[0] = 0.0;
        diag[0] = 2.0;
        rhs[0] = (p[1] - p[0]) * 3.0;
        for i in 1..m {
            rhs[i] = (p[i + 1] - p[i - 1]) * 3.0;
        }
        diag[m] = 2.0;
        sup[m] = 0.0;
        rhs[m] = (p[m] - p[m - 1]) * 3.0;

        solve_tridiagonal(&sub, &diag, &mut sup, &mut rhs);

        self.a = p[..m].to_vec();
        self.b = rhs[..m].to_vec();
        self.c = (0..m)
            .map(|i| (p[i + 1] - p[i]) * 3.0 - rhs[i] * 2.0 - rhs[i + 1])
            .collect();
        self.d = (0..m)
            .map(|i| (p[i] - p[i + 1]) * 2.0 + rhs[i] + rhs[i + 1])
            .collect();
    }

    /// Map global t to (segment index, local u). The index is clamped so
    /// that t = 1 lands at the end of the last segment.
    fn segment(&self, t: f64) -> (usize, f64) {
        let m = self.segments();
        let u = t * m as f64;
        let i = (u.floor().max(0.0) as usize).min(m - 1);
        (i, u - i as f64)
    }

    pub fn f(&self, t: f64) -> NVec2 {
        let (i, u) = self.segment(t);
        self.a[i] + self.b[i] * u + self.c[i] * (u * u) + self.d[i] * (u * u * u)
    }

    pub fn d(&self, t: f64) -> NVec2 {
        let (i, u) = self.segment(t);
        let m = self.segments() as f64;
        (self.b[i] + self.c[i] * (2.0 * u) + self.d[i] * (3.0 * u * u)) * m
    }

    pub fn dd(&self, t: f64) -> NVec2 {
        let (i, u) = self.segment(t);
        let m = self.segments() as f64;
        (self.c[i] * 2.0 + self.d[i] * (6.0 * u)) * (m * m)
    }
}

/// Thomas algorithm with vector-valued right-hand side. `sup` and `rhs` are
/// overwritten; on return `rhs` holds the solution.
fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &mut [f64], rhs: &mut [NVec2]) {
    let n = diag.len();

    // Forward sweep
    sup[0] /= diag[0];
    rhs[0] /= diag[0];
    for j in 1..n {
        let w = 1.0 / (diag[j] - sub[j] * sup[j - 1]);
        sup[j] *= w;
        rhs[j] = (rhs[j] - rhs[j - 1] * sub[j]) * w;
    }

    // Back substitution
    for k in (0..n - 1).rev() {
        rhs[k] = rhs[k] - rhs[k + 1] * sup[k];
    }
}
