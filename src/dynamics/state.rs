use crate::error::SimError;

// ---------------------------------------------------------------------------
// Phase-space state: one sample of a 1D oscillator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub time: f64, // s
    pub pos: f64,  // m
    pub vel: f64,  // m/s
}

impl PhaseState {
    pub fn new(time: f64, pos: f64, vel: f64) -> Self {
        Self { time, pos, vel }
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

/// Time grid and initial conditions for one integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub t_max: f64,   // time horizon, s
    pub steps: usize, // number of equal steps N
    pub x0: f64,      // initial position, m
    pub v0: f64,      // initial velocity, m/s
}

impl SimConfig {
    pub fn new(t_max: f64, steps: usize, x0: f64, v0: f64) -> Self {
        Self { t_max, steps, x0, v0 }
    }

    /// Step size `t_max / steps`.
    pub fn dt(&self) -> f64 {
        self.t_max / self.steps as f64
    }

    /// Time of sample `i`, computed directly so the grid never drifts.
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt()
    }

    pub fn initial_state(&self) -> PhaseState {
        PhaseState::new(0.0, self.x0, self.v0)
    }

    /// Reject configurations the integrator cannot honour. Nothing is clamped.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.steps < 1 {
            return Err(SimError::InvalidStepCount(self.steps));
        }
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(SimError::InvalidTimeHorizon(self.t_max));
        }
        if !self.x0.is_finite() || !self.v0.is_finite() {
            return Err(SimError::NonFiniteInitialCondition {
                x0: self.x0,
                v0: self.v0,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            t_max: 5.0,  // 5 s
            steps: 100,  // dt = 0.05 s
            x0: 0.5,
            v0: 5.0,
        }
    }
}
