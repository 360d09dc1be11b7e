use crate::{
    Config, ConvertError, DelimitedHistoryWriter, Delimiter, FileError, HistoryReader,
    HistoryWriter, QuotedHistoryReader, EXIT_CONVERSION_FAILED,
};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

/// Drains `reader` into `writer`, stopping at the first failing record
///
/// Returns the number of records written.
pub fn convert<R, W>(reader: &mut R, writer: &mut W) -> Result<usize, ConvertError>
where
    R: HistoryReader + ?Sized,
    W: HistoryWriter + ?Sized,
{
    let mut written = 0;
    for record in reader.read_records() {
        writer.write_record(&record?)?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

/// Converts a single quoted history file into a delimited file
///
/// The whole conversion happens in memory and `output` is only created once
/// every record has been read and written, so a failed conversion never
/// leaves a truncated output file behind.
pub fn convert_file(input: &Path, output: &Path, delimiter: Delimiter) -> Result<usize, FileError> {
    let at_input = |source: ConvertError| FileError {
        path: input.to_path_buf(),
        source,
    };

    let file = File::open(input).map_err(|e| at_input(e.into()))?;
    let mut reader = QuotedHistoryReader::new(BufReader::new(file));
    let mut writer = DelimitedHistoryWriter::new(vec![], delimiter);

    let written = convert(&mut reader, &mut writer).map_err(at_input)?;
    let bytes = writer.into_inner().map_err(at_input)?;

    fs::write(output, bytes).map_err(|e| FileError {
        path: output.to_path_buf(),
        source: e.into(),
    })?;

    Ok(written)
}

/// Result of converting one input file
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<usize, FileError>,
}

/// Per file outcomes of a [run], in the order the files were given
#[derive(Debug, Default)]
pub struct Summary {
    outcomes: Vec<FileOutcome>,
}

impl Summary {
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            EXIT_CONVERSION_FAILED
        }
    }

    /// Writes one line per file, successes to `out` and failures to `err`
    ///
    /// Failure lines name the file the error was found in, which is the
    /// output file when only writing the result failed.
    pub fn report<O, E>(&self, out: &mut O, err: &mut E) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(records) => writeln!(
                    out,
                    "converted {} -> {} ({} records)",
                    outcome.input.display(),
                    outcome.output.display(),
                    records
                )?,
                Err(e) => writeln!(err, "failed {}", e)?,
            }
        }

        Ok(())
    }
}

/// Converts every input/output pair of `config` in turn
///
/// A failure on one file is recorded in the [Summary] and does not stop
/// the remaining files from being converted.
pub fn run(config: &Config) -> Summary {
    let delimiter = config.delimiter();
    tracing::debug!(%delimiter, files = config.pairs().len(), "starting conversion");

    let outcomes = config
        .pairs()
        .iter()
        .map(|(input, output)| {
            let result = convert_file(input, output, delimiter);
            match &result {
                Ok(records) => tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    records,
                    "converted"
                ),
                Err(e) => tracing::warn!(input = %input.display(), error = %e, "conversion failed"),
            }

            FileOutcome {
                input: input.clone(),
                output: output.clone(),
                result,
            }
        })
        .collect();

    Summary { outcomes }
}
