use nalgebra::DVector;

use crate::error::SimError;
use crate::physics::exact::exact_series;
use crate::sim::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Derived quantities over a trajectory
// ---------------------------------------------------------------------------

/// Undamped energy per unit mass at every sample: `½v² + ½ω²x²`.
pub fn energy(traj: &Trajectory, omega: f64) -> DVector<f64> {
    let kinetic = traj.vel().component_mul(traj.vel()) * 0.5;
    let potential = traj.pos().component_mul(traj.pos()) * (0.5 * omega * omega);
    kinetic + potential
}

/// Largest |x| after dropping the leading `discard_fraction` of samples.
///
/// Used to read off the stationary amplitude of a driven run once the
/// transient has died out.
pub fn stationary_amplitude(traj: &Trajectory, discard_fraction: f64) -> f64 {
    let n = traj.len();
    if n == 0 {
        return 0.0;
    }
    let start = ((n as f64) * discard_fraction.clamp(0.0, 1.0)) as usize;
    let start = start.min(n - 1);
    traj.pos().rows(start, n - start).amax()
}

/// Worst-case distance between a trajectory and the exact undamped solution
/// evaluated on the same time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OracleDeviation {
    pub max_pos: f64,
    pub max_vel: f64,
}

pub fn deviation_from_exact(traj: &Trajectory, omega: f64) -> Result<OracleDeviation, SimError> {
    let start = traj.first().ok_or(SimError::InvalidStepCount(0))?;
    let (x_exact, v_exact) = exact_series(traj.time(), omega, start.pos, start.vel)?;
    Ok(OracleDeviation {
        max_pos: (traj.pos() - x_exact).amax(),
        max_vel: (traj.vel() - v_exact).amax(),
    })
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Summary statistics computed from one run.
#[derive(Debug, Clone)]
pub struct TrajectorySummary {
    pub max_pos: f64,
    pub max_vel: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub energy_drift: f64, // (E_final - E_initial) / E_initial
    pub stationary_amplitude: f64,
    pub duration: f64,
}

impl TrajectorySummary {
    /// Fraction of leading samples treated as transient.
    pub const TRANSIENT_FRACTION: f64 = 0.1;

    pub fn from_trajectory(traj: &Trajectory, omega: f64) -> Self {
        let e = energy(traj, omega);
        let initial_energy = e.iter().next().copied().unwrap_or(0.0);
        let final_energy = e.iter().last().copied().unwrap_or(0.0);
        let energy_drift = if initial_energy > 0.0 {
            (final_energy - initial_energy) / initial_energy
        } else {
            0.0
        };

        TrajectorySummary {
            max_pos: traj.pos().amax(),
            max_vel: traj.vel().amax(),
            initial_energy,
            final_energy,
            energy_drift,
            stationary_amplitude: stationary_amplitude(traj, Self::TRANSIENT_FRACTION),
            duration: traj.last().map_or(0.0, |s| s.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::PhaseState;
    use approx::assert_relative_eq;

    fn ramp() -> Trajectory {
        let states: Vec<PhaseState> = (0..=10)
            .map(|i| PhaseState::new(i as f64, if i < 2 { 5.0 } else { 0.1 * i as f64 }, 1.0))
            .collect();
        Trajectory::from_states(&states)
    }

    #[test]
    fn energy_per_sample() {
        let traj = Trajectory::from_states(&[
            PhaseState::new(0.0, 0.5, 5.0),
            PhaseState::new(0.1, 0.0, -2.0),
        ]);
        let e = energy(&traj, 5.0);
        assert_relative_eq!(e[0], 15.625);
        assert_relative_eq!(e[1], 2.0);
    }

    #[test]
    fn transient_is_discarded() {
        let traj = ramp();
        assert_relative_eq!(stationary_amplitude(&traj, 0.0), 5.0);
        // 11 samples, 20% dropped -> starts at index 2
        assert_relative_eq!(stationary_amplitude(&traj, 0.2), 1.0);
        assert_relative_eq!(stationary_amplitude(&traj, 1.0), 1.0);
    }

    #[test]
    fn exact_samples_have_no_deviation() {
        let exact = crate::physics::exact::sample(5.0, 0.5, 5.0, 5.0, 200).unwrap();
        let dev = deviation_from_exact(&exact, 5.0).unwrap();
        assert!(dev.max_pos < 1e-12);
        assert!(dev.max_vel < 1e-12);
    }

    #[test]
    fn summary_reports_drift() {
        let traj = Trajectory::from_states(&[
            PhaseState::new(0.0, 0.0, 2.0),
            PhaseState::new(1.0, 0.0, 4.0),
        ]);
        let s = TrajectorySummary::from_trajectory(&traj, 1.0);
        assert_relative_eq!(s.initial_energy, 2.0);
        assert_relative_eq!(s.final_energy, 8.0);
        assert_relative_eq!(s.energy_drift, 3.0);
        assert_relative_eq!(s.max_vel, 4.0);
        assert_relative_eq!(s.duration, 1.0);
    }
}
