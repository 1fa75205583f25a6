use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingDirection {
    LeftToRight,
    RightToLeft,
    Vertical,
    Webtoon,
}

impl ReadingDirection {
    pub const ALL: [ReadingDirection; 4] = [
        ReadingDirection::LeftToRight,
        ReadingDirection::RightToLeft,
        ReadingDirection::Vertical,
        ReadingDirection::Webtoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingDirection::LeftToRight => "LEFT_TO_RIGHT",
            ReadingDirection::RightToLeft => "RIGHT_TO_LEFT",
            ReadingDirection::Vertical => "VERTICAL",
            ReadingDirection::Webtoon => "WEBTOON",
        }
    }
}

impl fmt::Display for ReadingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| format!("Unknown reading direction: '{}'", s))
    }
}
