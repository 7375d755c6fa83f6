pub mod analysis;
pub mod dynamics;
pub mod error;
pub mod physics;
pub mod scenario;
pub mod sim;

pub use error::SimError;
pub use physics::oscillator::{AccelerationLaw, Oscillator, OscillatorBuilder};
pub use scenario::{presets, Scenario};
pub use sim::{compare_schemes, integrate, simulate, Scheme, Trajectory};

pub mod types {
    pub use crate::dynamics::state::{PhaseState, SimConfig};
    pub use crate::physics::oscillator::{Damped, Driven, Undamped};
}
