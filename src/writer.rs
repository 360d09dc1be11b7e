use crate::{ConvertError, Delimiter, Record};
use std::io::Write;

/// Interface to write game records into an external sink
pub trait HistoryWriter {
    /// Write a single record, failing without output if it cannot be
    /// represented in the target format.
    fn write_record(&mut self, record: &Record) -> Result<(), ConvertError>;

    fn flush(&mut self) -> Result<(), ConvertError>;
}

/// Implementation of [HistoryWriter] producing one line per record, fields
/// joined by a single [Delimiter] without header, quoting or escaping
pub struct DelimitedHistoryWriter<W: Write> {
    inner: csv::Writer<W>,
    delimiter: Delimiter,
    written: usize,
}

impl<W> DelimitedHistoryWriter<W>
where
    W: Write,
{
    pub fn new(writer: W, delimiter: Delimiter) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(delimiter.as_byte())
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        Self {
            inner,
            delimiter,
            written: 0,
        }
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered output and returns the underlying writer
    pub fn into_inner(self) -> Result<W, ConvertError> {
        self.inner
            .into_inner()
            .map_err(|e| ConvertError::Io(e.into_error()))
    }
}

impl<W> HistoryWriter for DelimitedHistoryWriter<W>
where
    W: Write,
{
    fn write_record(&mut self, record: &Record) -> Result<(), ConvertError> {
        let delimiter = self.delimiter.as_char();

        // Without quoting a field holding the delimiter would shift every
        // following column, so such records are refused outright.
        if let Some((field, value)) = record
            .text_fields()
            .into_iter()
            .find(|(_, value)| value.contains(delimiter))
        {
            return Err(ConvertError::UnescapableField {
                record: self.written + 1,
                field,
                value: value.to_string(),
                delimiter: self.delimiter,
            });
        }

        self.inner.serialize(record)?;
        self.written += 1;

        Ok(())
    }

    fn flush(&mut self) -> Result<(), ConvertError> {
        self.inner.flush()?;
        Ok(())
    }
}
