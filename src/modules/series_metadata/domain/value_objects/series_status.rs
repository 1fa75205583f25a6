use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a series.
///
/// Persisted as its canonical upper-case name; existing rows depend on
/// these exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesStatus {
    Ended,
    #[default]
    Ongoing,
    Abandoned,
    Hiatus,
}

impl SeriesStatus {
    pub const ALL: [SeriesStatus; 4] = [
        SeriesStatus::Ended,
        SeriesStatus::Ongoing,
        SeriesStatus::Abandoned,
        SeriesStatus::Hiatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesStatus::Ended => "ENDED",
            SeriesStatus::Ongoing => "ONGOING",
            SeriesStatus::Abandoned => "ABANDONED",
            SeriesStatus::Hiatus => "HIATUS",
        }
    }
}

impl fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeriesStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown series status: '{}'", s))
    }
}
