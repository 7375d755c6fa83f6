use nalgebra::DVector;

use crate::dynamics::state::PhaseState;

/// Sampled time, position and velocity columns of equal length.
///
/// Produced whole by one integration run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    t: DVector<f64>,
    x: DVector<f64>,
    v: DVector<f64>,
}

impl Trajectory {
    pub(crate) fn from_columns(t: DVector<f64>, x: DVector<f64>, v: DVector<f64>) -> Self {
        debug_assert!(t.len() == x.len() && x.len() == v.len());
        Self { t, x, v }
    }

    pub(crate) fn from_states(states: &[PhaseState]) -> Self {
        let n = states.len();
        Self {
            t: DVector::from_iterator(n, states.iter().map(|s| s.time)),
            x: DVector::from_iterator(n, states.iter().map(|s| s.pos)),
            v: DVector::from_iterator(n, states.iter().map(|s| s.vel)),
        }
    }

    /// Number of samples, N+1 for an N-step run.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn time(&self) -> &DVector<f64> {
        &self.t
    }

    pub fn pos(&self) -> &DVector<f64> {
        &self.x
    }

    pub fn vel(&self) -> &DVector<f64> {
        &self.v
    }

    pub fn get(&self, i: usize) -> Option<PhaseState> {
        (i < self.len()).then(|| PhaseState::new(self.t[i], self.x[i], self.v[i]))
    }

    pub fn first(&self) -> Option<PhaseState> {
        self.get(0)
    }

    pub fn last(&self) -> Option<PhaseState> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = PhaseState> + '_ {
        (0..self.len()).map(move |i| PhaseState::new(self.t[i], self.x[i], self.v[i]))
    }

    /// `(x, v)` pairs for a phase diagram.
    pub fn phase_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.v.iter().copied())
    }
}
