pub mod exact;
pub mod oscillator;

pub use exact::{exact, exact_series};
pub use oscillator::{AccelerationLaw, Damped, Driven, Law, Oscillator, OscillatorBuilder, Undamped};
