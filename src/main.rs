use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::info;

use payment_resource::io::{read_resources, write_json, write_summary};
use payment_resource::logging::{LogConfig, init_logging};

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

/// Reads payment resources and prints them normalized or summarized.
#[derive(Parser)]
struct Args {
    /// JSON file holding one payment resource or an array of them
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging("payment_resource", &LogConfig::from_env()) {
        eprintln!("Error initializing logging: {e}");
    }

    let file = File::open(&args.file).unwrap_or_else(|e| {
        eprintln!("Error opening {}: {e}", args.file.display());
        process::exit(1);
    });
    info!("reading {}", args.file.display());

    let resources = read_resources(BufReader::new(file)).unwrap_or_else(|e| {
        eprintln!("Error reading payment resources: {e}");
        process::exit(1);
    });

    let stdout = io::stdout();
    let result = match args.format {
        OutputFormat::Json => write_json(stdout.lock(), &resources),
        OutputFormat::Csv => write_summary(stdout.lock(), &resources),
    };

    if let Err(e) = result {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}
