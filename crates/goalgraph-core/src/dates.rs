//! Date sources for seeded records.
//!
//! A `Fixed` source yields the calendar literals baked into the dataset.
//! A `Relative` source maps every date onto today, yesterday, or seven
//! days before today, anchored at a given date.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A day relative to the anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Yesterday,
    WeekAgo,
}

impl RelativeDay {
    fn days_back(&self) -> u64 {
        match self {
            Self::Today => 0,
            Self::Yesterday => 1,
            Self::WeekAgo => 7,
        }
    }
}

/// Which kind of date source to use, as named in configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateSourceKind {
    #[default]
    Fixed,
    Relative,
}

impl DateSourceKind {
    /// Resolve into a concrete source, anchoring relative dates at the
    /// current local date.
    pub fn resolve(self) -> DateSource {
        match self {
            Self::Fixed => DateSource::Fixed,
            Self::Relative => DateSource::relative_to_today(),
        }
    }
}

impl FromStr for DateSourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "relative" => Ok(Self::Relative),
            _ => Err(CoreError::InvalidDateSource(s.to_string())),
        }
    }
}

impl fmt::Display for DateSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::Relative => f.write_str("relative"),
        }
    }
}

/// Supplies the date and time strings stamped onto seeded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Fixed,
    Relative { today: NaiveDate },
}

impl DateSource {
    pub fn relative_to_today() -> Self {
        Self::Relative {
            today: Local::now().date_naive(),
        }
    }

    pub fn kind(&self) -> DateSourceKind {
        match self {
            Self::Fixed => DateSourceKind::Fixed,
            Self::Relative { .. } => DateSourceKind::Relative,
        }
    }

    /// A `YYYY-MM-DD` date: `fixed` verbatim, or `day` relative to the anchor.
    pub fn date(&self, fixed: &str, day: RelativeDay) -> String {
        match self {
            Self::Fixed => fixed.to_string(),
            Self::Relative { today } => shift(*today, day).format(DATE_FORMAT).to_string(),
        }
    }

    /// A `YYYY-MM-DDTHH:MM` timestamp. The relative form keeps the clock
    /// time of `fixed` and replaces its date.
    pub fn datetime(&self, fixed: &str, day: RelativeDay) -> String {
        match self {
            Self::Fixed => fixed.to_string(),
            Self::Relative { .. } => {
                let time = fixed.split_once('T').map_or("00:00", |(_, t)| t);
                format!("{}T{}", self.date(fixed, day), time)
            }
        }
    }
}

fn shift(today: NaiveDate, day: RelativeDay) -> NaiveDate {
    today
        .checked_sub_days(Days::new(day.days_back()))
        .unwrap_or(NaiveDate::MIN)
}
