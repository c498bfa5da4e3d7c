//! Solves the Colebrook equation and traces every Brent step.
//!
//! Run with `RUST_LOG=debug` to also see the `LogObserver` events:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p zeroin-observers --example trace
//! ```

use std::error::Error;

use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};
use zeroin_core::Observer;
use zeroin_models::pipe_friction::{Colebrook, ColebrookSides, FrictionFactor, PipeFlow};
use zeroin_observers::LogObserver;
use zeroin_solvers::equation::brent::{self, Action, Config, Event};

/// Builds the log filter from `RUST_LOG` directives, warning level if none.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> Result<(), Box<dyn Error>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&rust_log))
        .init();

    let flow = PipeFlow {
        density: MassDensity::new::<kilogram_per_cubic_meter>(1.23),
        viscosity: DynamicViscosity::new::<pascal_second>(1.79e-5),
        diameter: Length::new::<meter>(0.005),
        velocity: Velocity::new::<meter_per_second>(40.0),
        roughness: Length::new::<meter>(0.0015e-3),
    };
    let model = Colebrook::new(&flow)?;

    println!("Colebrook friction factor");
    println!("  Reynolds number:    {:.1}", flow.reynolds_number());
    println!("  relative roughness: {:.3e}", flow.relative_roughness());
    println!();
    println!("{:>4}  {:<31}  {:>22}  {:>12}", "iter", "step", "f", "residual");

    let mut log = LogObserver::new("colebrook");
    let observer = |event: &Event<'_, f64, ColebrookSides>| -> Option<Action> {
        println!(
            "{:>4}  {:<31}  {:>22.17}  {:>12.3e}",
            event.iter,
            event.step.to_string(),
            event.x(),
            event.residual()
        );
        log.observe(event)
    };

    let solution = brent::solve(
        &model,
        &FrictionFactor,
        FrictionFactor::BRACKET,
        &Config::default(),
        observer,
    )?;

    println!();
    println!("f = {} after {} iterations", solution.x, solution.iters);
    println!("residual = {:e}", solution.residual);

    Ok(())
}
