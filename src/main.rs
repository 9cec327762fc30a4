use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rocket_equation::{read_masses, FuelReport};

#[derive(Parser)]
#[command(version, about = "Fuel needed to launch a list of module masses", long_about = None)]
struct Args {
    #[arg(default_value = "input", help = "File of whitespace separated module masses")]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let masses = read_masses(&args.input).context("failed to load masses")?;

    println!("{}", FuelReport::compute(&masses));
    Ok(())
}
