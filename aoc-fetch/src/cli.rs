//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Download an Advent of Code puzzle's example and input
///
/// The session cookie is read from `AOC_SESSION`, or from a `.env` file in
/// the working directory when the variable is unset.
#[derive(Parser, Debug)]
#[command(name = "aoc-fetch", about, version)]
pub struct Args {
    /// Day to fetch
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Puzzle year
    #[arg(short, long, default_value_t = 2023)]
    pub year: u16,

    /// Directory the example and input files are written to (must exist)
    #[arg(long, default_value = "inputs")]
    pub inputs_dir: PathBuf,
}
