use std::f64::consts::TAU;
use std::hint::black_box;
use std::time::Instant;

use crate::simulation::curve::{Curve, CurveKind};
use crate::simulation::error::SimError;
use crate::simulation::integrator::{Integrator, Scheme};
use crate::simulation::states::{NVec2, OdeState};

/// Build a wavy curve with `order + 1` control points, no rand needed
fn make_curve(kind: CurveKind, order: usize) -> Result<Curve, SimError> {
    let points = (0..=order)
        .map(|i| {
            let i_f = i as f64;
            NVec2::new(i_f * 10.0, (i_f * 0.37).sin() * 50.0)
        })
        .collect();
    Curve::create(kind, points)
}

/// Time f/d/dd evaluation for both curve families over a range of orders
pub fn bench_curves() -> Result<(), SimError> {
    let orders = [1, 3, 5, 10, 20, 40];
    let samples = 10_000;

    for kind in [CurveKind::Polynomial, CurveKind::NaturalSpline] {
        for order in orders {
            let curve = make_curve(kind, order)?;

            // Warm up
            black_box(curve.sample(100));

            let t0 = Instant::now();
            for i in 0..=samples {
                let t = i as f64 / samples as f64;
                black_box(curve.f(t) + curve.d(t) + curve.dd(t));
            }
            let per_eval = t0.elapsed().as_secs_f64() / (samples + 1) as f64;

            let t1 = Instant::now();
            let mut rebuilt = curve.clone();
            for i in 0..100 {
                rebuilt.set_point(order / 2, NVec2::new(i as f64, 0.0))?;
            }
            let per_update = t1.elapsed().as_secs_f64() / 100.0;

            println!(
                "{:?} order = {:3}, f+d+dd = {:10.3e} s, update = {:10.3e} s",
                kind, order, per_eval, per_update
            );
        }
    }
    Ok(())
}

/// Euler vs RK4 on the harmonic oscillator over one period
/// Paste output directly into a spreadsheet to graph
pub fn bench_integrators() -> Result<(), SimError> {
    println!("h,euler_err,rk4_err,euler_ms,rk4_ms");

    let oscillator = |_t: f64, y: &OdeState| OdeState::new(y[1], -y[0]);

    for h in [0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001] {
        let mut row = Vec::with_capacity(4);

        for scheme in [Scheme::Euler, Scheme::Rk4] {
            let mut ode = Integrator::new(scheme, h, oscillator)?;
            ode.state = OdeState::new(1.0, 0.0);

            let t0 = Instant::now();
            match ode.integrate(TAU) {
                Ok(()) => {}
                Err(never) => match never {},
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0;

            let err = (ode.state - OdeState::new(1.0, 0.0)).norm();
            row.push((err, ms));
        }

        println!("{},{:.3e},{:.3e},{:.6},{:.6}", h, row[0].0, row[1].0, row[0].1, row[1].1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_curve_reports_degenerate_orders() {
        assert!(matches!(make_curve(CurveKind::Polynomial, 0), Err(SimError::TooFewControlPoints { .. })));
        let curve = make_curve(CurveKind::NaturalSpline, 5).unwrap();
        assert_eq!(curve.points().len(), 6);
    }

    #[test]
    fn integrator_benchmark_runs_to_completion() {
        assert_eq!(bench_integrators(), Ok(()));
    }
}
