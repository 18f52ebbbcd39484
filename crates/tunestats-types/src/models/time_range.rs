//! Lookback window for "top items" queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three lookback windows the music service offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last four weeks
    ShortTerm,
    /// Roughly the last six months
    #[default]
    MediumTerm,
    /// All available history
    LongTerm,
}

impl TimeRange {
    /// All ranges, shortest first.
    pub const ALL: [Self; 3] = [Self::ShortTerm, Self::MediumTerm, Self::LongTerm];

    /// Query-string value sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::MediumTerm => "medium_term",
            Self::LongTerm => "long_term",
        }
    }

    /// Polish label shown next to ranked lists.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortTerm => "Ostatni miesiąc",
            Self::MediumTerm => "Ostatnie 6 miesięcy",
            Self::LongTerm => "Wszystkie czasy",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    /// Accepts the wire names as well as the short `short`/`medium`/`long`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short_term" | "short" => Ok(Self::ShortTerm),
            "medium_term" | "medium" => Ok(Self::MediumTerm),
            "long_term" | "long" => Ok(Self::LongTerm),
            other => Err(format!("unknown time range: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&TimeRange::ShortTerm).unwrap(), "\"short_term\"");
        let parsed: TimeRange = serde_json::from_str("\"long_term\"").unwrap();
        assert_eq!(parsed, TimeRange::LongTerm);
        assert_eq!(TimeRange::default(), TimeRange::MediumTerm);
    }

    #[test]
    fn test_from_str_accepts_short_forms() {
        assert_eq!("short".parse::<TimeRange>().unwrap(), TimeRange::ShortTerm);
        assert_eq!("medium_term".parse::<TimeRange>().unwrap(), TimeRange::MediumTerm);
        assert!("yearly".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeRange::ShortTerm.label(), "Ostatni miesiąc");
        assert_eq!(TimeRange::LongTerm.label(), "Wszystkie czasy");
    }
}
