//! Download a day's example and input and store them as local files

use crate::error::FetchError;
use aoc_http_client::AocClient;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Paths and sizes of the files written by one run
#[derive(Debug)]
pub struct FetchedFiles {
    pub example_path: PathBuf,
    pub example_bytes: usize,
    pub input_path: PathBuf,
    pub input_bytes: usize,
}

/// Fetches puzzle material for one year into a fixed output directory
///
/// Output layout: `{inputs_dir}/example{day}.txt` and `{inputs_dir}/input{day}.txt`.
pub struct Fetcher {
    client: AocClient,
    session: Zeroizing<String>,
    year: u16,
    inputs_dir: PathBuf,
}

impl Fetcher {
    pub fn new(
        client: AocClient,
        session: Zeroizing<String>,
        year: u16,
        inputs_dir: PathBuf,
    ) -> Self {
        Self {
            client,
            session,
            year,
            inputs_dir,
        }
    }

    /// Path of the example file for a day
    pub fn example_path(&self, day: u8) -> PathBuf {
        self.inputs_dir.join(format!("example{}.txt", day))
    }

    /// Path of the input file for a day
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.inputs_dir.join(format!("input{}.txt", day))
    }

    /// Fetch the puzzle page and input for `day`, then write both files
    ///
    /// Both requests complete before anything is written, so a failed request
    /// leaves existing files untouched. The two writes are independent: if the
    /// input write fails, the example file has already been replaced.
    pub fn run(&self, day: u8) -> Result<FetchedFiles, FetchError> {
        info!(year = self.year, day, "Fetching puzzle page");
        let example = self.client.get_example(self.year, day, &self.session)?;
        debug!(bytes = example.len(), "Extracted example");

        info!(year = self.year, day, "Fetching puzzle input");
        let input = self.client.get_input(self.year, day, &self.session)?;

        let example_path = self.example_path(day);
        write_file(&example_path, example.as_bytes())?;

        let input_path = self.input_path(day);
        write_file(&input_path, &input)?;

        Ok(FetchedFiles {
            example_path,
            example_bytes: example.len(),
            input_path,
            input_bytes: input.len(),
        })
    }
}

/// Replace the full contents of `path`; the parent directory must already exist
fn write_file(path: &Path, contents: &[u8]) -> Result<(), FetchError> {
    fs::write(path, contents).map_err(|source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
