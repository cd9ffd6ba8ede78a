use clap::Parser;
use log::LevelFilter;

use dcmeta_core::cli::{Cli, OutputFormat};
use dcmeta_core::extraction::philips_stack_slices;
use dcmeta_core::{ScanExtractor, TextReport};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let metadata = match ScanExtractor::extract_from_file(&cli.file) {
        Ok(metadata) => metadata,
        Err(err) => {
            eprintln!("error: failed to read {}: {}", cli.file.display(), err);
            std::process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Text => {
            print!("{}", TextReport::new(&metadata));
            if cli.philips_slices {
                println!("Stack Slices:    {}", philips_stack_slices(&cli.file));
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            match serde_json::to_string_pretty(&metadata) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("error: failed to serialize metadata: {}", err);
                    std::process::exit(1);
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("error: JSON output requires building with the 'json' feature");
                std::process::exit(1);
            }
        }
    }
}
