// ---------------------------------------------------------------------------
// Acceleration laws for a 1D harmonic oscillator
// ---------------------------------------------------------------------------

/// Right-hand side of `x'' = a(t, x, v)`.
///
/// Implementations must be pure: the integrator may call them in any order
/// and expects the same answer for the same arguments.
pub trait AccelerationLaw {
    fn accel(&self, t: f64, x: f64, v: f64) -> f64;
}

/// Any `Fn(t, x, v) -> a` is a law, so one-off models need no new type.
impl<F> AccelerationLaw for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn accel(&self, t: f64, x: f64, v: f64) -> f64 {
        self(t, x, v)
    }
}

/// Free oscillation: `a = -ω²x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Undamped {
    pub omega: f64, // rad/s
}

impl AccelerationLaw for Undamped {
    fn accel(&self, _t: f64, x: f64, _v: f64) -> f64 {
        -self.omega * self.omega * x
    }
}

/// Viscous damping on top of the restoring force: `a = -ω²x - 2δv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped {
    pub omega: f64, // rad/s
    pub delta: f64, // 1/s, damping coefficient
}

impl AccelerationLaw for Damped {
    fn accel(&self, t: f64, x: f64, v: f64) -> f64 {
        Undamped { omega: self.omega }.accel(t, x, v) - 2.0 * self.delta * v
    }
}

/// Damped oscillator under sinusoidal forcing:
/// `a = -ω²x - 2δv + a_D sin(ω_D t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Driven {
    pub damped: Damped,
    pub amplitude: f64, // m/s^2
    pub frequency: f64, // rad/s
}

impl AccelerationLaw for Driven {
    fn accel(&self, t: f64, x: f64, v: f64) -> f64 {
        self.damped.accel(t, x, v) + self.amplitude * (self.frequency * t).sin()
    }
}

/// The narrowest law that describes an [`Oscillator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Law {
    Undamped(Undamped),
    Damped(Damped),
    Driven(Driven),
}

impl AccelerationLaw for Law {
    fn accel(&self, t: f64, x: f64, v: f64) -> f64 {
        match self {
            Law::Undamped(law) => law.accel(t, x, v),
            Law::Damped(law) => law.accel(t, x, v),
            Law::Driven(law) => law.accel(t, x, v),
        }
    }
}

// ---------------------------------------------------------------------------
// Oscillator parameters
// ---------------------------------------------------------------------------

/// Physical parameters of a (possibly damped, possibly driven) oscillator.
///
/// The oscillator is itself a law: with zero damping ratio and zero drive
/// amplitude it reduces exactly to [`Undamped`].
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    pub omega: f64,           // natural angular frequency ω₀, rad/s
    pub damping_ratio: f64,   // ζ, dimensionless
    pub drive_amplitude: f64, // a_D, m/s^2
    pub drive_frequency: f64, // ω_D, rad/s
}

impl Oscillator {
    /// Damping coefficient δ = ζ·ω₀.
    pub fn damping_coefficient(&self) -> f64 {
        self.damping_ratio * self.omega
    }

    pub fn undamped_law(&self) -> Undamped {
        Undamped { omega: self.omega }
    }

    pub fn damped_law(&self) -> Damped {
        Damped {
            omega: self.omega,
            delta: self.damping_coefficient(),
        }
    }

    pub fn driven_law(&self) -> Driven {
        Driven {
            damped: self.damped_law(),
            amplitude: self.drive_amplitude,
            frequency: self.drive_frequency,
        }
    }

    /// Undamped when there is neither damping nor drive, damped when there
    /// is no drive, driven otherwise.
    pub fn law(&self) -> Law {
        if self.is_driven() {
            Law::Driven(self.driven_law())
        } else if self.is_damped() {
            Law::Damped(self.damped_law())
        } else {
            Law::Undamped(self.undamped_law())
        }
    }

    pub fn is_damped(&self) -> bool {
        self.damping_ratio != 0.0
    }

    pub fn is_driven(&self) -> bool {
        self.drive_amplitude != 0.0
    }

    /// Energy per unit mass of the undamped system: `½v² + ½ω₀²x²`.
    pub fn energy(&self, x: f64, v: f64) -> f64 {
        0.5 * v * v + 0.5 * self.omega * self.omega * x * x
    }
}

impl AccelerationLaw for Oscillator {
    fn accel(&self, t: f64, x: f64, v: f64) -> f64 {
        self.driven_law().accel(t, x, v)
    }
}

// ---------------------------------------------------------------------------
// Oscillator builder
// ---------------------------------------------------------------------------

pub struct OscillatorBuilder {
    omega: f64,
    damping_ratio: f64,
    drive_amplitude: f64,
    drive_frequency: f64,
}

impl OscillatorBuilder {
    pub fn new(omega: f64) -> Self {
        Self {
            omega,
            damping_ratio: 0.0,
            drive_amplitude: 0.0,
            drive_frequency: 0.0,
        }
    }

    pub fn damping_ratio(mut self, v: f64) -> Self { self.damping_ratio = v; self }
    pub fn drive_amplitude(mut self, v: f64) -> Self { self.drive_amplitude = v; self }
    pub fn drive_frequency(mut self, v: f64) -> Self { self.drive_frequency = v; self }

    /// Shorthand for amplitude and frequency of the forcing term.
    pub fn drive(self, amplitude: f64, frequency: f64) -> Self {
        self.drive_amplitude(amplitude).drive_frequency(frequency)
    }

    pub fn build(self) -> Oscillator {
        Oscillator {
            omega: self.omega,
            damping_ratio: self.damping_ratio,
            drive_amplitude: self.drive_amplitude,
            drive_frequency: self.drive_frequency,
        }
    }
}
