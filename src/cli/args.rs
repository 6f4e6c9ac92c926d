//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use crate::api::DEFAULT_API_URL;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    /// Override for the storage directory (default: the user data dir).
    pub data_dir: Option<PathBuf>,
    /// Override for the API endpoint.
    pub api_url: String,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("unbored - pick activity suggestions off the Bored API and keep a to-do list");
    eprintln!();
    eprintln!("Usage: unbored [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data-dir <PATH>   Store the selection list under PATH");
    eprintln!("                      (default: the user data directory)");
    eprintln!("  --api-url <URL>     Query URL instead of {}", DEFAULT_API_URL);
    eprintln!("  -h, --help          Show this help message");
    eprintln!("  -V, --version       Show version");
    eprintln!();
    eprintln!("Keys inside the app:");
    eprintln!("  enter  fetch a suggestion / save it     f      edit filters");
    eprintln!("  j/k    move around the list             x      mark done");
    eprintln!("  J/K    reorder saved entries            o      open the link");
    eprintln!("  d      drop a saved entry               q      quit");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut data_dir: Option<PathBuf> = None;
    let mut api_url = DEFAULT_API_URL.to_string();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("unbored {}", VERSION);
            std::process::exit(0);
        } else if arg == "--data-dir" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --data-dir",
                ));
            }
            data_dir = Some(PathBuf::from(&args[i]));
            i += 1;
        } else if arg == "--api-url" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --api-url",
                ));
            }
            api_url = args[i].clone();
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig { data_dir, api_url })
}
