use clap::Parser;
use metar_stations::cli::{args::Args, commands};
use std::error::Error as _;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create async runtime and run the compilation
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Fatal error - print the full cause chain and exit non-zero
            eprintln!("Error: {}", error);
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
