//! Independent integrators advanced concurrently.

use integration_tests::advance;
use odestep_core::TimeStep;
use odestep_solvers::{Integrator, Method};
use odestep_systems::{DampedOscillator, OscillatorState};
use rayon::prelude::*;

fn assert_send<T: Send>() {}

fn ensemble(size: usize) -> Vec<Integrator<DampedOscillator>> {
    (0..size)
        .map(|i| {
            let omega = 0.5 + i as f64 * 0.1;
            let zeta = i as f64 / size as f64;
            let oscillator = DampedOscillator::new(omega, zeta).unwrap();
            Integrator::new(oscillator, OscillatorState::default(), 0.0)
        })
        .collect()
}

#[test]
fn integrators_are_send() {
    assert_send::<Integrator<DampedOscillator>>();
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let dt = TimeStep::new(0.01).unwrap();
    let mut parallel = ensemble(64);
    let mut sequential = parallel.clone();

    parallel
        .par_iter_mut()
        .for_each(|integrator| advance(integrator, Method::Rk4, dt, 500));
    for integrator in &mut sequential {
        advance(integrator, Method::Rk4, dt, 500);
    }

    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.state(), s.state());
        assert_eq!(p.time(), s.time());
    }
}
