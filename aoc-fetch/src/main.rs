//! AOC fetch - download a puzzle's example and input into local files

mod cli;
mod config;
mod error;
mod fetcher;

use aoc_http_client::AocClient;
use clap::Parser;
use cli::Args;
use config::Config;
use fetcher::Fetcher;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Args::parse();

    let result = run(args);
    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    std::process::exit(exit_code(&result));
}

/// Process exit status for a run: 0 on success, 1 on any error
fn exit_code(result: &Result<(), error::CliError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);

    let client = AocClient::new().map_err(|e| error::CliError::Config(e.to_string()))?;
    let fetcher = Fetcher::new(client, config.session, config.year, config.inputs_dir);

    let files = fetcher.run(config.day)?;
    println!(
        "{}/{:02}: example {} ({} bytes), input {} ({} bytes)",
        config.year,
        config.day,
        files.example_path.display(),
        files.example_bytes,
        files.input_path.display(),
        files.input_bytes,
    );

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
