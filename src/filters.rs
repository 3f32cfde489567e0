//! City, month and day filters and the interactive collector that gathers them.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use chrono::{Month, Weekday};
use thiserror::Error;
use tracing::{info, warn};

use crate::calendar::{WEEKDAYS, weekday_name};
use crate::input::LineSource;

/// Months the datasets cover, in calendar order. Position + 1 is the month number.
pub static FILTER_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Lowercase weekday keys, Monday first. Position matches [`WEEKDAYS`].
pub static FILTER_DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const ALL: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("'{0}' is not one of: chicago, new york city, washington")]
    UnknownCity(String),
    #[error("'{0}' is not one of: all, january, february, march, april, may, june")]
    UnknownMonth(String),
    #[error("'{0}' is not one of: all, monday, tuesday, wednesday, thursday, friday, saturday, sunday")]
    UnknownDay(String),
    #[error("input closed before a valid {0} was entered")]
    InputClosed(&'static str),
}

/// A city with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: &[Self] = &[Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Lowercase key as typed by the user.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Parses a city name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownCity`] for anything outside the three cities.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let key = input.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| FilterError::UnknownCity(input.to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either every month, or one of January through June.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Parses `all` or a month name from [`FILTER_MONTHS`], ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownMonth`] for anything else, including
    /// months after June.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let key = input.to_lowercase();
        if key == ALL {
            return Ok(Self::All);
        }

        FILTER_MONTHS
            .iter()
            .position(|m| *m == key)
            .and_then(|idx| u8::try_from(idx + 1).ok())
            .and_then(|number| Month::try_from(number).ok())
            .map(Self::Only)
            .ok_or_else(|| FilterError::UnknownMonth(input.to_string()))
    }

    /// 1-based month number the filter keeps, or `None` for `all`.
    #[must_use]
    pub fn month_number(&self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Only(month) => Some(month.number_from_month()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(month) => f.write_str(&month.name().to_lowercase()),
        }
    }
}

/// Either every day of the week, or one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Parses `all` or a full weekday name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownDay`] for abbreviations and anything else.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let key = input.to_lowercase();
        if key == ALL {
            return Ok(Self::All);
        }

        FILTER_DAYS
            .iter()
            .position(|d| *d == key)
            .map(|idx| Self::Only(WEEKDAYS[idx]))
            .ok_or_else(|| FilterError::UnknownDay(input.to_string()))
    }

    /// Title-cased weekday name rows must match, or `None` for `all`.
    #[must_use]
    pub fn day_name(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(day) => Some(weekday_name(*day)),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(day) => f.write_str(FILTER_DAYS[day.num_days_from_monday() as usize]),
        }
    }
}

/// The validated (city, month, day) triple for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    /// Validates a triple passed on the command line.
    ///
    /// # Errors
    ///
    /// Returns the first [`FilterError`] among the three values.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, FilterError> {
        Ok(Self {
            city: City::parse(city)?,
            month: MonthFilter::parse(month)?,
            day: DayFilter::parse(day)?,
        })
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city, self.month, self.day)
    }
}

/// Prompts for city, month and day until each one is valid.
///
/// Invalid answers are reported and re-prompted without limit.
///
/// # Errors
///
/// Fails only if the input source closes or the console cannot be written.
pub fn collect_filters<S, W>(source: &mut S, out: &mut W) -> Result<FilterSelection>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;

    let city = prompt_until(
        source,
        out,
        "city",
        "Please enter the city in which you'd like to explore the bikeshare data (chicago, new york city, washington): ",
        City::parse,
    )?;
    let month = prompt_until(
        source,
        out,
        "month",
        "Now please enter the month which you'd like to use as a filter for your data (use 'all' if you want all the months): ",
        MonthFilter::parse,
    )?;
    let day = prompt_until(
        source,
        out,
        "day",
        "Now please enter the day of the week which you'd like to use as a filter for your data (use 'all' if you want all the days of the week): ",
        DayFilter::parse,
    )?;

    writeln!(
        out,
        "{0} Great! you have chosen your desired city and the filters! {0}",
        "*".repeat(10)
    )?;

    let selection = FilterSelection { city, month, day };
    info!(%selection, "Filters selected");
    Ok(selection)
}

fn prompt_until<S, W, T>(
    source: &mut S,
    out: &mut W,
    what: &'static str,
    prompt: &str,
    parse: fn(&str) -> Result<T, FilterError>,
) -> Result<T>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{prompt}")?;
    loop {
        out.flush()?;
        let Some(line) = source.next_line()? else {
            return Err(FilterError::InputClosed(what).into());
        };

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(field = what, error = %e, "Rejected filter input");
                writeln!(out, "Sorry, that was an invalid input. Please try again: ")?;
            }
        }
    }
}
