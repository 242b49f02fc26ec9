use crate::error::AppError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An NHL season, identified by the calendar year it starts in.
///
/// Seasons start in the fall and cross a year boundary, so the upstream
/// token concatenates both years: `Season::new(2018)` is `"20182019"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    start_year: i32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Season { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    /// The 8-digit token used in query strings.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:04}", self.start_year, self.end_year())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::invalid_season(s));
        }
        let (first, second) = s.split_at(4);
        let start: i32 = first.parse().map_err(|_| AppError::invalid_season(s))?;
        let end: i32 = second.parse().map_err(|_| AppError::invalid_season(s))?;
        if end != start + 1 {
            return Err(AppError::invalid_season(s));
        }
        Ok(Season::new(start))
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

/// Payload of `seasons/current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonsResponse {
    #[serde(default)]
    pub seasons: Vec<SeasonInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonInfo {
    #[serde(rename = "seasonId")]
    pub season_id: String,
    #[serde(rename = "regularSeasonStartDate")]
    pub regular_season_start_date: String,
    #[serde(rename = "regularSeasonEndDate", default)]
    pub regular_season_end_date: Option<String>,
    #[serde(rename = "seasonEndDate", default)]
    pub season_end_date: Option<String>,
}
