use crate::UsageError;
use std::fmt;

/// Field separators supported by the writer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma separated values, used when no `-d` flag is given
    #[default]
    Comma,
    /// Pipe delimited values
    Pipe,
    /// Tab delimited values
    Tab,
}

impl Delimiter {
    /// Resolves the value of the `-d` flag
    ///
    /// The tab delimiter may be given either as a literal tab character or
    /// as the two character escape `\t`, since most shells pass the latter
    /// through unchanged.
    pub fn from_flag(flag: Option<&str>) -> Result<Self, UsageError> {
        match flag {
            None => Ok(Delimiter::Comma),
            Some("|") => Ok(Delimiter::Pipe),
            Some("\t") | Some("\\t") => Ok(Delimiter::Tab),
            Some(other) => Err(UsageError::UnsupportedDelimiter(other.to_string())),
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Pipe => b'|',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Pipe => write!(f, "pipe"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}
