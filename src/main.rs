mod config;

use std::{fs, process::ExitCode, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use relipmoc::{render_error, render_token_lines, render_tokens, tokenize};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Cli, Config, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let config = Config::from(&cli);
    debug!(?config, "starting");

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Tokenizes the configured file and prints the tokens.
///
/// Returns `Ok(false)` when the source itself is rejected; the diagnostic has
/// already been printed by then.
fn run(config: &Config) -> Result<bool> {
    let file_name = config.file.to_string_lossy();

    let size = fs::metadata(&config.file)
        .with_context(|| format!("Failed to read {}", file_name))?
        .len();
    if size > config.max_bytes {
        bail!(
            "{} is {} bytes, above the limit of {} bytes",
            file_name,
            size,
            config.max_bytes
        );
    }

    let source = fs::read_to_string(&config.file)
        .with_context(|| format!("Failed to read {}", file_name))?;

    let start = Instant::now();
    let result = tokenize(&source);
    info!("Tokenized in {:?}", start.elapsed());

    let stream = match result {
        Ok(stream) => stream,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return Ok(false);
        }
    };

    for warning in &stream.warnings {
        warn!("{}", warning);
        eprint!("{}", render_error(warning, &source, &file_name));
    }

    match config.format {
        OutputFormat::List => println!("{}", render_tokens(&stream.tokens)),
        OutputFormat::Lines => print!("{}", render_token_lines(&stream.tokens)),
    }

    Ok(true)
}
