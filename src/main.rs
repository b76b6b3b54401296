use clap::Parser;
use tracing::info;

use solar_yield::{
    load_measurements, plot_day_profile, plot_measurements, report, simulate_day, sunrise_sunset,
};

mod cli;
mod telemetry;

use cli::{Cli, Command, MeasurementArgs, SimulateArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(args) => run_simulate(&args)?,
        Command::Measurements(args) => run_measurements(&args)?,
    }
    Ok(())
}

fn run_simulate(args: &SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config();
    let profile = simulate_day(&config)?;
    let sun = sunrise_sunset(&config.location, config.date)?;

    if args.table {
        println!("{}", report::format_table(&profile));
    }
    println!("{}", report::format_summary(&profile, Some(sun)));

    if let Some(path) = &args.plot {
        plot_day_profile(&profile, path)?;
        info!(path = %path.display(), "day profile chart written");
    }
    Ok(())
}

fn run_measurements(args: &MeasurementArgs) -> Result<(), Box<dyn std::error::Error>> {
    let series = load_measurements(&args.file, &args.to_options())?;
    print!("{}", report::format_measurements(&series));

    if let Some(path) = &args.plot {
        plot_measurements(&series, path)?;
        info!(path = %path.display(), "measurement chart written");
    }
    Ok(())
}
