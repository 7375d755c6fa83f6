use nalgebra::DVector;

use crate::error::SimError;
use crate::sim::trajectory::Trajectory;

/// Closed-form solution of the undamped oscillator at time `t`.
///
/// `x = x0 cos(ωt) + (v0/ω) sin(ωt)`, `v = -x0 ω sin(ωt) + v0 cos(ωt)`.
pub fn exact(t: f64, omega: f64, x0: f64, v0: f64) -> Result<(f64, f64), SimError> {
    if omega == 0.0 {
        return Err(SimError::ZeroFrequency);
    }
    Ok(exact_unchecked(t, omega, x0, v0))
}

fn exact_unchecked(t: f64, omega: f64, x0: f64, v0: f64) -> (f64, f64) {
    let (s, c) = (omega * t).sin_cos();
    (x0 * c + v0 / omega * s, -x0 * omega * s + v0 * c)
}

/// Evaluate the exact solution over an arbitrary set of times.
pub fn exact_series(
    times: &DVector<f64>,
    omega: f64,
    x0: f64,
    v0: f64,
) -> Result<(DVector<f64>, DVector<f64>), SimError> {
    if omega == 0.0 {
        return Err(SimError::ZeroFrequency);
    }
    let pos = times.map(|t| exact_unchecked(t, omega, x0, v0).0);
    let vel = times.map(|t| exact_unchecked(t, omega, x0, v0).1);
    Ok((pos, vel))
}

/// Sample the exact solution on its own evenly spaced grid of `points`
/// intervals over `[0, t_max]`, independent of any integration step.
pub fn sample(
    omega: f64,
    x0: f64,
    v0: f64,
    t_max: f64,
    points: usize,
) -> Result<Trajectory, SimError> {
    if points < 1 {
        return Err(SimError::InvalidStepCount(points));
    }
    if !t_max.is_finite() || t_max <= 0.0 {
        return Err(SimError::InvalidTimeHorizon(t_max));
    }
    let dt = t_max / points as f64;
    let times = DVector::from_fn(points + 1, |i, _| i as f64 * dt);
    let (pos, vel) = exact_series(&times, omega, x0, v0)?;
    Ok(Trajectory::from_columns(times, pos, vel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn matches_initial_conditions() {
        let (x, v) = exact(0.0, 5.0, 0.5, 5.0).unwrap();
        assert_eq!(x, 0.5);
        assert_eq!(v, 5.0);
    }

    #[test]
    fn periodic_over_one_period() {
        let omega = 5.0;
        let period = 2.0 * PI / omega;
        let (x, v) = exact(period, omega, 0.5, 5.0).unwrap();
        assert_abs_diff_eq!(x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(v, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn conserves_energy() {
        let omega = 5.0;
        let e0 = 0.5 * 5.0_f64.powi(2) + 0.5 * omega * omega * 0.25;
        for i in 0..50 {
            let (x, v) = exact(i as f64 * 0.137, omega, 0.5, 5.0).unwrap();
            let e = 0.5 * v * v + 0.5 * omega * omega * x * x;
            assert_abs_diff_eq!(e, e0, epsilon = 1e-10);
        }
    }

    #[test]
    fn zero_frequency_rejected() {
        assert_eq!(exact(1.0, 0.0, 1.0, 1.0), Err(SimError::ZeroFrequency));
        let times = DVector::from_vec(vec![0.0, 1.0]);
        assert!(exact_series(&times, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn sample_grid_is_independent_of_integration() {
        let exact = sample(5.0, 0.5, 5.0, 5.0, 500).unwrap();
        assert_eq!(exact.len(), 501);
        assert_abs_diff_eq!(exact.time()[500], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(exact.time()[1], 0.01, epsilon = 1e-15);
    }

    #[test]
    fn sample_rejects_bad_grid() {
        assert!(sample(5.0, 0.5, 5.0, 5.0, 0).is_err());
        assert!(sample(5.0, 0.5, 5.0, -1.0, 10).is_err());
    }
}
