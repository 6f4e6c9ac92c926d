//! CLI argument parsing for unbored.

mod args;

pub use args::{CliConfig, parse_args};
