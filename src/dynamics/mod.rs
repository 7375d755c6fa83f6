pub mod state;

pub use state::{PhaseState, SimConfig};
