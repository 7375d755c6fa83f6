pub mod integrator;
pub mod runner;
pub mod trajectory;

pub use integrator::{step, Scheme};
pub use runner::{compare_schemes, integrate, simulate, SchemeComparison};
pub use trajectory::Trajectory;
