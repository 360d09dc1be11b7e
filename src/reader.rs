use crate::{ConvertError, Delimiter, RawRecord, Record};
use regex::Regex;
use std::io::{BufRead, Read};
use std::sync::LazyLock;

/// A whole line of single quoted values separated by whitespace
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*'[^']*'(?:\s+'[^']*')*\s*$").expect("valid record line regex")
});

static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']*)'").expect("valid quoted field regex"));

/// Interface to read game records from an external source
pub trait HistoryReader {
    /// Read records lazily, in source order.
    ///
    /// Each item is either `Ok` with a validated [Record] or `Err` describing
    /// why the corresponding line could not be turned into one. The iterator
    /// is single pass: reading again requires re-opening the source.
    fn read_records<'a>(
        &'a mut self,
    ) -> Box<dyn Iterator<Item = Result<Record, ConvertError>> + 'a>;
}

/// Implementation of [HistoryReader] for the quoted scores history format
///
/// ```text
/// '2021-05-01' 'Hawks' '3' 'Eagles' '1' 'North Field'
/// ```
pub struct QuotedHistoryReader<R>(R);

impl<R> QuotedHistoryReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl<R> HistoryReader for QuotedHistoryReader<R>
where
    R: BufRead,
{
    fn read_records<'a>(
        &'a mut self,
    ) -> Box<dyn Iterator<Item = Result<Record, ConvertError>> + 'a> {
        Box::new(
            (&mut self.0)
                .lines()
                .enumerate()
                .filter_map(|(index, line)| match line {
                    Err(e) => Some(Err(ConvertError::Io(e))),
                    Ok(line) if line.trim().is_empty() => None,
                    Ok(line) => Some(parse_quoted_line(index + 1, &line)),
                }),
        )
    }
}

fn parse_quoted_line(line: usize, content: &str) -> Result<Record, ConvertError> {
    let malformed = |reason: String| ConvertError::MalformedRecord {
        line,
        raw: content.trim_end_matches('\r').to_string(),
        reason,
    };

    if !LINE_RE.is_match(content) {
        return Err(malformed(
            "expected single-quoted fields separated by whitespace".to_string(),
        ));
    }

    let fields = FIELD_RE
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect::<Vec<&str>>();

    let raw = RawRecord::from_fields(fields.iter().copied())
        .ok_or_else(|| malformed(format!("expected 6 quoted fields, found {}", fields.len())))?;

    Record::try_from(raw).map_err(malformed)
}

/// Implementation of [HistoryReader] for files produced by
/// [DelimitedHistoryWriter](crate::DelimitedHistoryWriter)
///
/// There is no header and no quoting, each line holds exactly six fields
/// separated by the configured [Delimiter].
pub struct DelimitedHistoryReader<R> {
    inner: csv::Reader<R>,
    delimiter: Delimiter,
}

impl<R> DelimitedHistoryReader<R>
where
    R: Read,
{
    pub fn new(reader: R, delimiter: Delimiter) -> Self {
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter.as_byte())
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        Self { inner, delimiter }
    }
}

impl<R> HistoryReader for DelimitedHistoryReader<R>
where
    R: Read,
{
    fn read_records<'a>(
        &'a mut self,
    ) -> Box<dyn Iterator<Item = Result<Record, ConvertError>> + 'a> {
        let separator = self.delimiter.as_char().to_string();

        Box::new(self.inner.records().map(
            move |result| -> Result<Record, ConvertError> {
                let record = result?;
                let malformed = |reason: String| ConvertError::MalformedRecord {
                    line: record.position().map_or(0, |p| p.line() as usize),
                    raw: record.iter().collect::<Vec<&str>>().join(&separator),
                    reason,
                };

                if record.len() != 6 {
                    return Err(malformed(format!(
                        "expected 6 fields, found {}",
                        record.len()
                    )));
                }
                let raw = record.deserialize::<RawRecord>(None)?;

                Record::try_from(raw).map_err(malformed)
            },
        ))
    }
}
