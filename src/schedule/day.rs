use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::SpendingError;

/// The seven canonical day names, in week order starting at Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayName {
    pub const ALL: [DayName; 7] = [
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
        DayName::Sunday,
    ];

    /// Offset from the week start, 0 for Monday through 6 for Sunday.
    pub fn offset(self) -> i64 {
        match self {
            DayName::Monday => 0,
            DayName::Tuesday => 1,
            DayName::Wednesday => 2,
            DayName::Thursday => 3,
            DayName::Friday => 4,
            DayName::Saturday => 5,
            DayName::Sunday => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayName::Monday => "Monday",
            DayName::Tuesday => "Tuesday",
            DayName::Wednesday => "Wednesday",
            DayName::Thursday => "Thursday",
            DayName::Friday => "Friday",
            DayName::Saturday => "Saturday",
            DayName::Sunday => "Sunday",
        }
    }

    pub fn is_weekday(self) -> bool {
        !matches!(self, DayName::Saturday | DayName::Sunday)
    }

    pub fn weekday(self) -> Weekday {
        match self {
            DayName::Monday => Weekday::Mon,
            DayName::Tuesday => Weekday::Tue,
            DayName::Wednesday => Weekday::Wed,
            DayName::Thursday => Weekday::Thu,
            DayName::Friday => Weekday::Fri,
            DayName::Saturday => Weekday::Sat,
            DayName::Sunday => Weekday::Sun,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayName {
    type Err = SpendingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DayName::ALL
            .into_iter()
            .find(|day| day.as_str() == value)
            .ok_or_else(|| SpendingError::UnknownDay(value.to_string()))
    }
}

/// Positional map from day names to calendar dates for one generated week.
///
/// "Monday" is always `start + 0` regardless of which weekday the start
/// date actually falls on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaysMap {
    dates: [NaiveDate; 7],
}

impl DaysMap {
    pub fn from_week_start(start: NaiveDate) -> Self {
        let mut dates = [start; 7];
        for day in DayName::ALL {
            dates[day.offset() as usize] = start + Duration::days(day.offset());
        }
        Self { dates }
    }

    pub fn date(&self, day: DayName) -> NaiveDate {
        self.dates[day.offset() as usize]
    }
}
