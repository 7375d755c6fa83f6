use oscillator_sim::analysis::{energy, TrajectorySummary};
use oscillator_sim::types::SimConfig;
use oscillator_sim::{compare_schemes, integrate, AccelerationLaw, Scheme};

/// Dry (Coulomb) friction: a constant-magnitude deceleration opposing the
/// motion, on top of the linear restoring force.
struct CoulombFriction {
    omega: f64,
    mu_g: f64, // friction deceleration, m/s^2
}

impl AccelerationLaw for CoulombFriction {
    fn accel(&self, _t: f64, x: f64, v: f64) -> f64 {
        let friction = if v > 0.0 {
            -self.mu_g
        } else if v < 0.0 {
            self.mu_g
        } else {
            0.0
        };
        -self.omega * self.omega * x + friction
    }
}

fn main() -> Result<(), oscillator_sim::SimError> {
    env_logger::init();

    let config = SimConfig::new(10.0, 5_000, 1.0, 0.0);

    // A closure is a law too: a square-wave drive on a free oscillator
    let omega = 3.0;
    let square_drive = move |t: f64, x: f64, _v: f64| {
        let push = if (omega * t).sin() >= 0.0 { 0.5 } else { -0.5 };
        -omega * omega * x + push
    };
    let driven = integrate(&square_drive, Scheme::EulerCromer, &config)?;
    let summary = TrajectorySummary::from_trajectory(&driven, omega);
    println!("Square-wave drive (closure law)");
    println!("  Max |x|:             {:.4} m", summary.max_pos);
    println!("  Stationary amplitude: {:.4} m", summary.stationary_amplitude);
    println!();

    let friction = CoulombFriction { omega, mu_g: 0.2 };
    let cmp = compare_schemes(&friction, &config)?;
    println!("Coulomb friction (trait law)");
    for scheme in Scheme::ALL {
        let e = energy(cmp.get(scheme), omega);
        println!(
            "  {:<14} E0 = {:.4}   E_end = {:.4}",
            scheme.name(),
            e[0],
            e[e.len() - 1]
        );
    }
    println!("Trajectory points: {}", cmp.euler.len());

    Ok(())
}
