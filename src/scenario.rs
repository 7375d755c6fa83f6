use std::f64::consts::PI;

use crate::dynamics::state::SimConfig;
use crate::error::SimError;
use crate::physics::oscillator::{Oscillator, OscillatorBuilder};
use crate::sim::integrator::Scheme;
use crate::sim::runner::{compare_schemes, simulate, SchemeComparison};
use crate::sim::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Scenario: an oscillator model plus the grid it is run on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub oscillator: Oscillator,
    pub config: SimConfig,
}

impl Scenario {
    pub fn run(&self, scheme: Scheme) -> Result<Trajectory, SimError> {
        simulate(&self.oscillator, scheme, &self.config)
    }

    pub fn compare(&self) -> Result<SchemeComparison, SimError> {
        compare_schemes(&self.oscillator, &self.config)
    }

    /// The closed form only exists for the free oscillator.
    pub fn has_exact_solution(&self) -> bool {
        !self.oscillator.is_damped() && !self.oscillator.is_driven() && self.oscillator.omega != 0.0
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Free oscillation, coarse enough that Euler visibly gains energy.
    pub fn undamped() -> Scenario {
        Scenario {
            name: "Free oscillation".into(),
            oscillator: OscillatorBuilder::new(5.0).build(),
            config: SimConfig::new(5.0, 100, 0.5, 5.0),
        }
    }

    /// Same start as [`undamped`], with damping ratio 0.5.
    pub fn damped() -> Scenario {
        Scenario {
            name: "Damped oscillation".into(),
            oscillator: OscillatorBuilder::new(5.0).damping_ratio(0.5).build(),
            config: SimConfig::new(5.0, 100, 0.5, 5.0),
        }
    }

    /// Lightly damped oscillator driven at its natural frequency.
    pub fn driven() -> Scenario {
        driven_at(2.0)
    }

    /// The driven preset with the drive frequency replaced. The time horizon
    /// stays at 50 periods of the resonant drive so runs are comparable.
    pub fn driven_at(drive_frequency: f64) -> Scenario {
        let omega = 2.0;
        Scenario {
            name: format!("Driven oscillation (omega_D = {})", drive_frequency),
            oscillator: OscillatorBuilder::new(omega)
                .damping_ratio(0.1)
                .drive(1.0, drive_frequency)
                .build(),
            config: SimConfig::new(100.0 * PI / omega, 10_000, 1.0, 0.0),
        }
    }

    pub fn all() -> Vec<Scenario> {
        vec![undamped(), damped(), driven()]
    }
}
