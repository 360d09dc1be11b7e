use serde::{Deserialize, Serialize};

/// A single game entry of a scores history.
///
/// Records are only ever built through [RawRecord] validation, so once a
/// [Record] exists both teams are non-empty and both scores are
/// non-negative integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    date: String,
    team1: String,
    score1: u32,
    team2: String,
    score2: u32,
    location: String,
}

impl Record {
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn team1(&self) -> &str {
        &self.team1
    }

    pub fn score1(&self) -> u32 {
        self.score1
    }

    pub fn team2(&self) -> &str {
        &self.team2
    }

    pub fn score2(&self) -> u32 {
        self.score2
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Named text fields in output order, scores excluded
    pub(crate) fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("date", &self.date),
            ("team1", &self.team1),
            ("team2", &self.team2),
            ("location", &self.location),
        ]
    }
}

/// The six fields of a record exactly as they appear in the source
///
/// Scores are kept as text here so that a bad value can be reported with
/// the line it came from rather than as an opaque deserialization error.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawRecord {
    pub date: String,
    pub team1: String,
    pub score1: String,
    pub team2: String,
    pub score2: String,
    pub location: String,
}

impl RawRecord {
    /// Positional mapping of parsed values, `None` unless exactly six are given
    pub fn from_fields<I, S>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut it = fields.into_iter().map(Into::into);
        let raw = RawRecord {
            date: it.next()?,
            team1: it.next()?,
            score1: it.next()?,
            team2: it.next()?,
            score2: it.next()?,
            location: it.next()?,
        };

        match it.next() {
            Some(_) => None,
            None => Some(raw),
        }
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        if raw.team1.is_empty() {
            return Err("team1 is empty".to_string());
        }
        if raw.team2.is_empty() {
            return Err("team2 is empty".to_string());
        }

        // Output is one line per record
        for (name, value) in [
            ("date", &raw.date),
            ("team1", &raw.team1),
            ("team2", &raw.team2),
            ("location", &raw.location),
        ] {
            if value.contains(['\r', '\n']) {
                return Err(format!("{} contains a line break: {:?}", name, value));
            }
        }

        Ok(Record {
            score1: parse_score("score1", &raw.score1)?,
            score2: parse_score("score2", &raw.score2)?,
            date: raw.date,
            team1: raw.team1,
            team2: raw.team2,
            location: raw.location,
        })
    }
}

fn parse_score(name: &str, value: &str) -> Result<u32, String> {
    // u32::from_str accepts a leading '+', scores are plain digits only
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{} is not a non-negative integer: {:?}", name, value));
    }

    value
        .parse()
        .map_err(|e| format!("{} is out of range: {:?} ({})", name, value, e))
}

#[cfg(test)]
impl Record {
    pub fn test(
        date: &str,
        team1: &str,
        score1: u32,
        team2: &str,
        score2: u32,
        location: &str,
    ) -> Self {
        Self {
            date: date.to_string(),
            team1: team1.to_string(),
            score1,
            team2: team2.to_string(),
            score2,
            location: location.to_string(),
        }
    }
}
