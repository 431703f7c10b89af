//! Command line configuration for the `relipmoc` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Tokenize a source file and print the resulting tokens.
#[derive(Parser, Debug)]
#[command(name = "relipmoc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizer for the relipmoc toy language", long_about = None)]
pub struct Cli {
    /// Source file to tokenize
    pub file: PathBuf,

    /// Refuse files larger than this many bytes
    #[arg(long, env = "RELIPMOC_MAX_BYTES", default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: u64,

    /// How to print the token sequence
    #[arg(long, value_enum, env = "RELIPMOC_FORMAT", default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, env = "RELIPMOC_VERBOSE")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "RELIPMOC_NO_COLOR")]
    pub no_color: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[T_FUNCTION, T_IDENTIFIER("main"), ...]`
    List,
    /// One `KIND (value)` per line
    Lines,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub max_bytes: u64,
    pub format: OutputFormat,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            file: cli.file.clone(),
            max_bytes: cli.max_bytes,
            format: cli.format,
        }
    }
}
