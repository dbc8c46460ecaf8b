use clap::Parser;
use log::{error, info};
use std::process;
use suvcalc_core::cli::report::{TextReport, VolumeSummary};
use suvcalc_core::cli::{Cli, OutputFormat};
use suvcalc_core::PetVolumeReader;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let options = cli.read_options();
    info!("Using options: {:?}", options);

    let reader = PetVolumeReader::new(options);
    let volume = match reader.read_volume(&cli.path) {
        Ok(volume) => volume,
        Err(e) => {
            error!("Failed to read {}: {}", cli.path.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let summary = VolumeSummary::new(&cli.path, cli.target, &volume);
    output_summary(&summary, cli.format);
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn output_summary(summary: &VolumeSummary, format: OutputFormat) {
    match format {
        OutputFormat::Max => match summary.max {
            Some(max) => println!("{}", max),
            None => {
                eprintln!("Error: volume is empty");
                process::exit(1);
            }
        },
        OutputFormat::Text => {
            println!("{}", TextReport::new(summary));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
