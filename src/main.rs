use clap::Parser;
use hilltop_fits::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(stats) if stats.is_success() => process::exit(0),
        Ok(_stats) => {
            // Some files failed under --keep-going; already reported
            process::exit(1);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
