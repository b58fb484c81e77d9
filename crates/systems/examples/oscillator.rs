//! Integrates the default damped oscillator and prints its trajectory as CSV.
//!
//! Starts at unit displacement, at rest, with `ω = 1` and `ζ = 0.1`, and steps
//! to `t = 100` with a fixed step size. Each row holds the time, the integrated
//! position and velocity, and the closed-form position for comparison.
//!
//! # Usage
//!
//! ```text
//! cargo run --example oscillator
//! cargo run --example oscillator -- euler
//! cargo run --example oscillator -- rk4 0.05 > trajectory.csv
//! RUST_LOG=trace cargo run --example oscillator -- euler 0.5
//! ```

use std::{
    error::Error,
    io::{self, BufWriter, Write},
};

use odestep_core::TimeStep;
use odestep_solvers::{Integrator, Method};
use odestep_systems::{DampedOscillator, OscillatorState};

const DURATION: f64 = 100.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let method = args
        .next()
        .as_deref()
        .map(str::parse::<Method>)
        .transpose()?
        .unwrap_or_default();
    let dt = args
        .next()
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(0.01);
    let dt = TimeStep::new(dt)?;

    let oscillator = DampedOscillator::default();
    let initial = OscillatorState::default();
    let steps = (DURATION / dt.value()).abs().round() as usize;

    log::info!("integrating {steps} {method} steps of {dt}");

    let mut integrator = Integrator::new(oscillator, initial, 0.0);
    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "time,position,velocity,exact_position")?;
    write_row(&mut out, &integrator, &initial)?;

    for _ in 0..steps {
        integrator.step(method, dt);
        write_row(&mut out, &integrator, &initial)?;
    }

    out.flush()?;
    Ok(())
}

fn write_row(
    out: &mut impl Write,
    integrator: &Integrator<DampedOscillator>,
    initial: &OscillatorState,
) -> io::Result<()> {
    let t = integrator.time();
    let state = integrator.state();
    let exact = integrator.system().exact(initial, t);

    writeln!(out, "{t},{},{},{}", state.position, state.velocity, exact.position)
}
