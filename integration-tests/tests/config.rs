//! Loading integration settings from JSON.

use approx::assert_relative_eq;
use integration_tests::advance;
use odestep_core::TimeStep;
use odestep_solvers::{Integrator, Method};
use odestep_systems::{DampedOscillator, OscillatorState};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RunConfig {
    method: Method,
    dt: TimeStep,
    steps: usize,
    oscillator: DampedOscillator,
    initial: OscillatorState,
}

fn parse(json: &str) -> Result<RunConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[test]
fn runs_from_json_config() {
    let config = parse(
        r#"{
            "method": "rk4",
            "dt": 0.01,
            "steps": 100,
            "oscillator": { "omega": 1.0, "zeta": 0.1 },
            "initial": { "position": 1.0, "velocity": 0.0 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.method, Method::Rk4);
    assert_eq!(config.oscillator, DampedOscillator::default());

    let mut integrator = Integrator::new(config.oscillator, config.initial, 0.0);
    advance(&mut integrator, config.method, config.dt, config.steps);

    let exact = config.oscillator.exact(&config.initial, integrator.time());
    assert_relative_eq!(integrator.state().position, exact.position, epsilon = 1e-6);
}

#[test]
fn rejects_invalid_step_size() {
    let err = parse(
        r#"{
            "method": "euler",
            "dt": 0.0,
            "steps": 10,
            "oscillator": { "omega": 1.0, "zeta": 0.1 },
            "initial": { "position": 1.0, "velocity": 0.0 }
        }"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("time step must be nonzero"), "{err}");
}

#[test]
fn rejects_invalid_oscillator() {
    let err = parse(
        r#"{
            "method": "rk4",
            "dt": 0.01,
            "steps": 10,
            "oscillator": { "omega": 1.0, "zeta": -0.1 },
            "initial": { "position": 1.0, "velocity": 0.0 }
        }"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("damping ratio"), "{err}");
}

#[test]
fn rejects_unknown_method() {
    let err = parse(
        r#"{
            "method": "midpoint",
            "dt": 0.01,
            "steps": 10,
            "oscillator": { "omega": 1.0, "zeta": 0.1 },
            "initial": { "position": 1.0, "velocity": 0.0 }
        }"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("unknown variant"), "{err}");
}

#[test]
fn serializes_settings() {
    let json = serde_json::to_string(&(Method::Euler, TimeStep::new(-0.5).unwrap())).unwrap();
    assert_eq!(json, r#"["euler",-0.5]"#);

    let json = serde_json::to_string(&DampedOscillator::default()).unwrap();
    assert_eq!(json, r#"{"omega":1.0,"zeta":0.1}"#);
}
