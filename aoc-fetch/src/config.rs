//! Configuration resolution from CLI args and the environment

use crate::cli::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Environment variable holding the adventofcode.com session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Dotenv file read from the working directory
pub const DOTENV_FILE: &str = ".env";

/// Resolved runtime configuration
pub struct Config {
    /// Day to fetch
    pub day: u8,
    /// Puzzle year
    pub year: u16,
    /// Output directory for example and input files
    pub inputs_dir: PathBuf,
    /// Session key (zeroized on drop)
    pub session: Zeroizing<String>,
}

impl Config {
    /// Build config from CLI args, reading the session from the environment
    /// or from `.env` in the working directory
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, load_session(Some(Path::new(DOTENV_FILE))))
    }

    /// Build config from CLI args and an already-read session value
    pub fn resolve(args: Args, session: Option<String>) -> Self {
        let session = session.unwrap_or_default();
        if session.is_empty() {
            warn!(
                "{} is not set; requests will be sent without a valid session",
                SESSION_ENV
            );
        }

        Config {
            day: args.day,
            year: args.year,
            inputs_dir: args.inputs_dir,
            session: Zeroizing::new(session),
        }
    }
}

/// Read the session, preferring the process environment over the dotenv file
pub fn load_session(dotenv_path: Option<&Path>) -> Option<String> {
    session_from(std::env::var(SESSION_ENV).ok(), dotenv_path)
}

/// A value already in the environment wins, even when empty; the dotenv file
/// is only consulted when the variable is unset.
fn session_from(env_value: Option<String>, dotenv_path: Option<&Path>) -> Option<String> {
    if env_value.is_some() {
        return env_value;
    }
    let path = dotenv_path?;

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return None,
        Err(e) => {
            warn!(path = %path.display(), "Ignoring unreadable dotenv file: {}", e);
            return None;
        }
    };

    for entry in entries {
        match entry {
            Ok((key, value)) if key == SESSION_ENV => {
                debug!(path = %path.display(), "Session read from dotenv file");
                return Some(value);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(path = %path.display(), "Stopped reading dotenv file: {}", e);
                return None;
            }
        }
    }
    None
}
