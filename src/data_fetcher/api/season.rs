//! Current-season computation

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

use super::urls::CURRENT_SEASON;
use crate::constants::season::{SEASON_START_MONTH, STATS_FILTER_GRACE_DAYS};
use crate::data_fetcher::models::{Season, SeasonsResponse};
use crate::error::AppError;

/// The running season and the day its regular season started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentSeason {
    pub season: Season,
    pub regular_season_start: NaiveDate,
}

impl CurrentSeason {
    pub fn stats_filter_active(&self) -> bool {
        self.stats_filter_active_at(today())
    }

    /// True from the day the grace period after the season start has elapsed.
    pub fn stats_filter_active_at(&self, today: NaiveDate) -> bool {
        today >= self.regular_season_start + Duration::days(STATS_FILTER_GRACE_DAYS)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Season a calendar date belongs to: October onward starts a new season.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use nhl_stats::data_fetcher::api::season_for_date;
///
/// let date = NaiveDate::from_ymd_opt(2019, 2, 16).unwrap();
/// assert_eq!(season_for_date(date).to_string(), "20182019");
/// ```
pub fn season_for_date(date: NaiveDate) -> Season {
    if date.month() >= SEASON_START_MONTH {
        Season::new(date.year())
    } else {
        Season::new(date.year() - 1)
    }
}

/// Season start assumed when no remote calendar is consulted.
pub fn local_season_start(season: Season) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(season.start_year(), SEASON_START_MONTH, 1)
}

pub fn local_current_season_at(today: NaiveDate) -> Result<CurrentSeason, AppError> {
    let season = season_for_date(today);
    let regular_season_start = local_season_start(season).ok_or_else(|| {
        AppError::datetime_parse_error(format!("No season start date for {season}"))
    })?;
    Ok(CurrentSeason {
        season,
        regular_season_start,
    })
}

/// Reads the first entry of a `seasons/current` payload.
pub fn current_season_from_response(response: &SeasonsResponse) -> Result<CurrentSeason, AppError> {
    let info = response.seasons.first().ok_or_else(|| {
        AppError::api_no_data("Unable to retrieve current NHL season", CURRENT_SEASON)
    })?;
    let season = info.season_id.parse::<Season>()?;
    let regular_season_start = NaiveDate::parse_from_str(&info.regular_season_start_date, "%Y-%m-%d")
        .map_err(|e| {
            AppError::datetime_parse_error(format!(
                "Invalid regularSeasonStartDate '{}': {e}",
                info.regular_season_start_date
            ))
        })?;
    Ok(CurrentSeason {
        season,
        regular_season_start,
    })
}
