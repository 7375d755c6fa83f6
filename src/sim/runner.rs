use log::{debug, warn};

use crate::dynamics::state::SimConfig;
use crate::error::SimError;
use crate::physics::oscillator::{AccelerationLaw, Oscillator};
use super::integrator::{step, Scheme};
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Fixed-step integration
// ---------------------------------------------------------------------------

/// Upper bound on samples reserved up front; longer runs grow as they go.
const MAX_PREALLOC: usize = 200_000;

fn sample_capacity(steps: usize) -> usize {
    steps.saturating_add(1).min(MAX_PREALLOC)
}

/// Integrate `x'' = law(t, x, v)` over `config.steps` equal steps.
///
/// The returned trajectory holds `steps + 1` samples starting at the initial
/// state, with `t_i = i * t_max / steps`. Divergence is not an error: a run
/// that blows up still returns every sample, non-finite values included.
pub fn integrate<L>(law: &L, scheme: Scheme, config: &SimConfig) -> Result<Trajectory, SimError>
where
    L: AccelerationLaw + ?Sized,
{
    config.validate()?;
    let dt = config.dt();
    debug!(
        "integrating {} steps with {} (dt={:.3e}, t_max={})",
        config.steps, scheme, dt, config.t_max
    );

    let mut states = Vec::with_capacity(sample_capacity(config.steps));
    let mut state = config.initial_state();
    states.push(state);

    for i in 0..config.steps {
        state = step(law, scheme, &state, dt, config.time_at(i + 1));
        states.push(state);
    }

    if state.is_finite() {
        debug!(
            "{} finished at t={} with x={:.6e}, v={:.6e}",
            scheme, state.time, state.pos, state.vel
        );
    } else {
        warn!("{} run diverged to a non-finite state by t={}", scheme, state.time);
    }

    Ok(Trajectory::from_states(&states))
}

/// Integrate an oscillator model (convenience wrapper).
pub fn simulate(
    oscillator: &Oscillator,
    scheme: Scheme,
    config: &SimConfig,
) -> Result<Trajectory, SimError> {
    let traj = integrate(oscillator, scheme, config)?;
    if let Some(last) = traj.last() {
        debug!(
            "{} final energy {:.6e} (initial {:.6e})",
            scheme,
            oscillator.energy(last.pos, last.vel),
            oscillator.energy(config.x0, config.v0)
        );
    }
    Ok(traj)
}

/// Both schemes run on the same law and grid.
#[derive(Debug, Clone)]
pub struct SchemeComparison {
    pub euler: Trajectory,
    pub euler_cromer: Trajectory,
}

impl SchemeComparison {
    pub fn get(&self, scheme: Scheme) -> &Trajectory {
        match scheme {
            Scheme::Euler => &self.euler,
            Scheme::EulerCromer => &self.euler_cromer,
        }
    }
}

/// Run Euler and Euler-Cromer side by side. The two runs share nothing.
pub fn compare_schemes<L>(law: &L, config: &SimConfig) -> Result<SchemeComparison, SimError>
where
    L: AccelerationLaw + ?Sized,
{
    Ok(SchemeComparison {
        euler: integrate(law, Scheme::Euler, config)?,
        euler_cromer: integrate(law, Scheme::EulerCromer, config)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
