pub use cli::Cli;
pub use config::Config;
pub use convert::{convert, convert_file, run, FileOutcome, Summary};
pub use delimiter::Delimiter;
pub use reader::{DelimitedHistoryReader, HistoryReader, QuotedHistoryReader};
pub use record::{RawRecord, Record};
use std::path::PathBuf;
pub use writer::{DelimitedHistoryWriter, HistoryWriter};

mod cli;
mod config;
mod convert;
mod delimiter;
mod reader;
mod record;
mod writer;

/// Exit status for an invalid command line
pub const EXIT_USAGE: u8 = 1;
/// Exit status when at least one file failed to convert
pub const EXIT_CONVERSION_FAILED: u8 = 2;

/// An invalid command line, detected before any file is opened
#[derive(thiserror::Error, Debug)]
pub enum UsageError {
    #[error("Unsupported delimiter {0:?}, expected '|' or a tab")]
    UnsupportedDelimiter(String),
    #[error("Expected at least one input file and one output file")]
    MissingPath,
    #[error("Got {0} paths, expected as many output files as input files")]
    UnpairedPaths(usize),
    #[error("Input file {} does not exist", .0.display())]
    MissingInput(PathBuf),
}

/// A failure while converting the records of one file
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Malformed record on line {line}: {reason}: {raw:?}")]
    MalformedRecord {
        line: usize,
        raw: String,
        reason: String,
    },
    #[error("Record {record} field {field} value {value:?} contains the {delimiter} delimiter")]
    UnescapableField {
        record: usize,
        field: &'static str,
        value: String,
        delimiter: Delimiter,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// A [ConvertError] tied to the file it happened in
#[derive(thiserror::Error, Debug)]
#[error("{}: {source}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: ConvertError,
}
