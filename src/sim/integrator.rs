use std::fmt;

use crate::dynamics::state::PhaseState;
use crate::physics::oscillator::AccelerationLaw;

// ---------------------------------------------------------------------------
// Explicit first-order update rules
// ---------------------------------------------------------------------------

/// Which position update is used at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Position advanced with the velocity from the start of the step.
    Euler,
    /// Position advanced with the velocity from the end of the step.
    EulerCromer,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Euler, Scheme::EulerCromer];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Euler => "Euler",
            Scheme::EulerCromer => "Euler-Cromer",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Euler update given the acceleration at the current state.
/// Returns `(x_next, v_next)`.
pub fn euler_update(x: f64, v: f64, a: f64, dt: f64) -> (f64, f64) {
    (x + v * dt, v + a * dt)
}

/// Euler-Cromer update given the acceleration at the current state.
/// Returns `(x_next, v_next)`.
pub fn euler_cromer_update(x: f64, v: f64, a: f64, dt: f64) -> (f64, f64) {
    let v_next = v + a * dt;
    (x + v_next * dt, v_next)
}

/// Advance one step. The acceleration is evaluated once, at `state`.
///
/// `next_time` is passed in rather than derived from `state.time + dt`
/// so that callers can keep the grid exact over many steps.
pub fn step<L>(
    law: &L,
    scheme: Scheme,
    state: &PhaseState,
    dt: f64,
    next_time: f64,
) -> PhaseState
where
    L: AccelerationLaw + ?Sized,
{
    let a = law.accel(state.time, state.pos, state.vel);
    let (pos, vel) = match scheme {
        Scheme::Euler => euler_update(state.pos, state.vel, a, dt),
        Scheme::EulerCromer => euler_cromer_update(state.pos, state.vel, a, dt),
    };
    PhaseState { time: next_time, pos, vel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::oscillator::Undamped;
    use approx::assert_relative_eq;

    #[test]
    fn velocity_update_is_shared() {
        let (_, v_e) = euler_update(0.5, 5.0, -12.5, 0.05);
        let (_, v_ec) = euler_cromer_update(0.5, 5.0, -12.5, 0.05);
        assert_eq!(v_e, v_ec);
        assert_relative_eq!(v_e, 4.375);
    }

    #[test]
    fn position_update_differs_by_scheme() {
        let (x_e, _) = euler_update(0.5, 5.0, -12.5, 0.05);
        let (x_ec, _) = euler_cromer_update(0.5, 5.0, -12.5, 0.05);
        assert_relative_eq!(x_e, 0.75);
        assert_relative_eq!(x_ec, 0.5 + 4.375 * 0.05);
    }

    #[test]
    fn schemes_agree_without_acceleration() {
        let (x_e, v_e) = euler_update(1.0, 2.0, 0.0, 0.1);
        let (x_ec, v_ec) = euler_cromer_update(1.0, 2.0, 0.0, 0.1);
        assert_eq!((x_e, v_e), (x_ec, v_ec));
    }

    #[test]
    fn acceleration_sampled_at_current_state() {
        use std::cell::RefCell;
        let calls = RefCell::new(Vec::new());
        let law = |t: f64, x: f64, v: f64| {
            calls.borrow_mut().push((t, x, v));
            -x
        };
        let s0 = PhaseState::new(0.3, 1.0, 2.0);
        let s1 = step(&law, Scheme::EulerCromer, &s0, 0.1, 0.4);
        assert_eq!(calls.borrow().as_slice(), &[(0.3, 1.0, 2.0)]);
        assert_eq!(s1.time, 0.4);
    }

    #[test]
    fn step_through_trait_object() {
        let law: &dyn AccelerationLaw = &Undamped { omega: 1.0 };
        let s1 = step(law, Scheme::Euler, &PhaseState::new(0.0, 1.0, 0.0), 0.1, 0.1);
        assert_relative_eq!(s1.pos, 1.0);
        assert_relative_eq!(s1.vel, -0.1);
    }

    #[test]
    fn display_names() {
        assert_eq!(Scheme::Euler.to_string(), "Euler");
        assert_eq!(Scheme::EulerCromer.to_string(), "Euler-Cromer");
    }
}
