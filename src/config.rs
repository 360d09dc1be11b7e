use crate::{Cli, Delimiter, UsageError};
use std::path::PathBuf;

/// Resolved command line, everything [run](crate::run) needs to know
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    delimiter: Delimiter,
    pairs: Vec<(PathBuf, PathBuf)>,
}

impl Config {
    pub fn new(delimiter: Delimiter, pairs: Vec<(PathBuf, PathBuf)>) -> Self {
        Self { delimiter, pairs }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Input and output paths, in the order they are converted
    pub fn pairs(&self) -> &[(PathBuf, PathBuf)] {
        &self.pairs
    }
}

impl TryFrom<Cli> for Config {
    type Error = UsageError;

    /// Validates the command line without opening any file
    ///
    /// Paths are split in half: the first half are inputs and the second
    /// half the matching outputs. Every input must already exist.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let delimiter = Delimiter::from_flag(cli.delimiter.as_deref())?;

        let mut paths = cli.paths;
        if paths.len() < 2 {
            return Err(UsageError::MissingPath);
        }
        if paths.len() % 2 != 0 {
            return Err(UsageError::UnpairedPaths(paths.len()));
        }

        let outputs = paths.split_off(paths.len() / 2);
        if let Some(missing) = paths.iter().find(|p| !p.exists()) {
            return Err(UsageError::MissingInput(missing.clone()));
        }

        let pairs = paths.into_iter().zip(outputs).collect();

        Ok(Config::new(delimiter, pairs))
    }
}
