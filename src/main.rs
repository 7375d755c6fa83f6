use std::process::ExitCode;

use log::error;

use oscillator_sim::analysis::{deviation_from_exact, TrajectorySummary};
use oscillator_sim::physics::exact;
use oscillator_sim::{presets, Scenario, Scheme, SimError};

fn main() -> ExitCode {
    env_logger::init();

    for scenario in presets::all() {
        if let Err(e) = report(&scenario) {
            error!("{}: {}", scenario.name, e);
            return ExitCode::FAILURE;
        }
    }

    // Off-resonance run for comparison with the driven preset
    let detuned = presets::driven_at(6.0);
    let resonant = presets::driven();
    match (resonant.run(Scheme::EulerCromer), detuned.run(Scheme::EulerCromer)) {
        (Ok(res), Ok(off)) => {
            let omega = resonant.oscillator.omega;
            let a_res = TrajectorySummary::from_trajectory(&res, omega).stationary_amplitude;
            let a_off = TrajectorySummary::from_trajectory(&off, omega).stationary_amplitude;
            println!("  Resonance");
            println!("  ──────────────────────────────────────────────────────────────────");
            println!("  Stationary amplitude at omega_D = 2:  {:>10.4}", a_res);
            println!("  Stationary amplitude at omega_D = 6:  {:>10.4}", a_off);
            println!("  Amplification:                        {:>10.1}x", a_res / a_off);
            println!();
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("resonance comparison: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn report(scenario: &Scenario) -> Result<(), SimError> {
    let osc = &scenario.oscillator;
    let config = &scenario.config;
    let cmp = scenario.compare()?;

    println!();
    println!("====================================================================");
    println!("  {}", scenario.name);
    println!("====================================================================");
    println!(
        "  omega_0: {:>7.3} rad/s   zeta:    {:>6.3}       delta: {:>7.3} 1/s",
        osc.omega,
        osc.damping_ratio,
        osc.damping_coefficient()
    );
    println!(
        "  a_D:     {:>7.3} m/s^2   omega_D: {:>6.3} rad/s",
        osc.drive_amplitude, osc.drive_frequency
    );
    println!(
        "  x0:      {:>7.3} m       v0:      {:>6.3} m/s   N: {}   t_max: {:.3} s",
        config.x0, config.v0, config.steps, config.t_max
    );
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<14} {:>12} {:>12} {:>12} {:>12}",
        "scheme", "max |x|", "E final", "E drift", "amp (stat.)"
    );
    for scheme in Scheme::ALL {
        let s = TrajectorySummary::from_trajectory(cmp.get(scheme), osc.omega);
        println!(
            "  {:<14} {:>12.4e} {:>12.4e} {:>11.2}% {:>12.4e}",
            scheme.name(),
            s.max_pos,
            s.final_energy,
            s.energy_drift * 100.0,
            s.stationary_amplitude
        );
    }
    println!();

    if scenario.has_exact_solution() {
        println!("  Deviation from exact solution");
        println!("  ──────────────────────────────────────────────────────────────────");
        for scheme in Scheme::ALL {
            let dev = deviation_from_exact(cmp.get(scheme), osc.omega)?;
            println!(
                "  {:<14} max |dx| = {:>10.4e}   max |dv| = {:>10.4e}",
                scheme.name(),
                dev.max_pos,
                dev.max_vel
            );
        }
        println!();
    }

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    let exact_header = if scenario.has_exact_solution() { "x exact" } else { "" };
    println!(
        "  {:>8}  {:>12}  {:>12}  {:>12}",
        "t (s)", "x Euler", "x E-Cromer", exact_header
    );
    println!("  {}", "─".repeat(52));

    let n = cmp.euler.len();
    let sample_interval = (n / 20).max(1);
    for i in (0..n).filter(|&i| i % sample_interval == 0 || i == n - 1) {
        let (Some(e), Some(ec)) = (cmp.euler.get(i), cmp.euler_cromer.get(i)) else {
            continue;
        };
        if scenario.has_exact_solution() {
            let (x, _) = exact::exact(e.time, osc.omega, config.x0, config.v0)?;
            println!("  {:>8.3}  {:>12.5}  {:>12.5}  {:>12.5}", e.time, e.pos, ec.pos, x);
        } else {
            println!("  {:>8.3}  {:>12.5}  {:>12.5}", e.time, e.pos, ec.pos);
        }
    }
    println!();

    Ok(())
}
