use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use windgen::format::write_profile;
use windgen::{WindProfileConfig, WindProfileError, WindProfileGenerator};

fn parse_frequency(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("frequency must be positive, got {}", value))
    }
}

#[derive(Parser, Debug)]
#[command(name = "windgen")]
#[command(about = "Generate a ramped sinusoidal hub-height wind profile", long_about = None)]
struct Args {
    /// Oscillation frequency in Hz (defaults to 0.2475)
    #[arg(short, long, value_parser = parse_frequency)]
    frequency: Option<f64>,

    /// Write the profile to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run<W: Write>(args: &Args, stdout: &mut W) -> Result<(), WindProfileError> {
    let mut config = WindProfileConfig::default();
    if let Some(frequency) = args.frequency {
        config = config.with_frequency(frequency);
    }
    let generator = WindProfileGenerator::new(config)?;

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_profile(&mut writer, &generator)?;
            info!(
                "wrote {} samples to {}",
                generator.sample_count(),
                path.display()
            );
        }
        None => write_profile(stdout, &generator)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
