//! AOC HTTP Client Library
//!
//! This library fetches puzzle material from the Advent of Code website using
//! a session cookie: the puzzle page (and the example embedded in it) and the
//! personalized puzzle input.
//!
//! # Features
//!
//! - Puzzle page and puzzle input fetching for any year and day
//! - Example extraction from the first `pre > code` block of a puzzle page
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let example = client.get_example(2023, 5, session)?;
//! let input = client.get_input(2023, 5, session)?;
//! println!("example: {} bytes, input: {} bytes", example.len(), input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use parser::extract_example;
