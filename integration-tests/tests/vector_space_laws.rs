//! Randomized checks that `OscillatorState` obeys the vector-space laws.

use approx::assert_relative_eq;
use odestep_core::VectorSpace;
use odestep_systems::OscillatorState;
use rand::{Rng, SeedableRng, rngs::StdRng};

const SAMPLES: usize = 1_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x0de5_7e9)
}

fn state(rng: &mut StdRng) -> OscillatorState {
    OscillatorState::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
}

fn scalar(rng: &mut StdRng) -> f64 {
    rng.random_range(-10.0..10.0)
}

fn assert_close(lhs: OscillatorState, rhs: OscillatorState) {
    assert_relative_eq!(lhs.position, rhs.position, epsilon = 1e-9, max_relative = 1e-12);
    assert_relative_eq!(lhs.velocity, rhs.velocity, epsilon = 1e-9, max_relative = 1e-12);
}

#[test]
fn scaling_distributes_over_state_addition() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (a, b, k) = (state(&mut rng), state(&mut rng), scalar(&mut rng));

        assert_close(a.add(&b).scale(k), a.scale(k).add(&b.scale(k)));
    }
}

#[test]
fn scaling_distributes_over_scalar_addition() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (a, k1, k2) = (state(&mut rng), scalar(&mut rng), scalar(&mut rng));

        assert_close(a.scale(k1 + k2), a.scale(k1).add(&a.scale(k2)));
    }
}

#[test]
fn scaling_is_associative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (a, k1, k2) = (state(&mut rng), scalar(&mut rng), scalar(&mut rng));

        assert_close(a.scale(k1).scale(k2), a.scale(k1 * k2));
    }
}

#[test]
fn addition_is_commutative_and_associative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (a, b, c) = (state(&mut rng), state(&mut rng), state(&mut rng));

        assert_eq!(a.add(&b), b.add(&a));
        assert_close(a.add(&b).add(&c), a.add(&b.add(&c)));
    }
}

#[test]
fn unit_scale_is_identity() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = state(&mut rng);

        assert_eq!(a.scale(1.0), a);
    }
}
