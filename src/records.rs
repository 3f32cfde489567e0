//! Trip rows as read from disk and the in-memory table built from them.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime};
use serde::Deserialize;

use crate::calendar::weekday_name;
use crate::config::CitySchema;
use crate::filters::City;

/// Timestamp layout used by every city's `Start Time` column.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single row deserialized from a city CSV.
///
/// Columns not named here (the unnamed index, `End Time`) are ignored.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub(crate) start_time: String,
    #[serde(rename = "Start Station")]
    pub(crate) start_station: String,
    #[serde(rename = "End Station")]
    pub(crate) end_station: String,
    #[serde(rename = "Trip Duration")]
    pub(crate) trip_duration: f64,
    #[serde(rename = "User Type")]
    pub(crate) user_type: String,
    #[serde(rename = "Gender", default)]
    pub(crate) gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub(crate) birth_year: Option<f64>,
}

/// One trip with its calendar columns derived from `start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub month: u32,
    pub day_of_week: &'static str,
    pub start_station: String,
    pub end_station: String,
    pub trip_duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        trip_duration: f64,
        user_type: Option<&str>,
    ) -> Self {
        Self {
            start_time,
            month: start_time.month(),
            day_of_week: weekday_name(start_time.weekday()),
            start_station: start_station.into(),
            end_station: end_station.into(),
            trip_duration,
            user_type: user_type.map(str::to_string),
            gender: None,
            birth_year: None,
        }
    }

    /// Set the optional demographic columns
    pub fn with_demographics(mut self, gender: Option<&str>, birth_year: Option<f64>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    /// Converts a raw row, keeping only the optional columns `schema` declares.
    ///
    /// # Errors
    ///
    /// Returns an error if `Start Time` does not match [`START_TIME_FORMAT`].
    pub fn from_raw(raw: RawTrip, schema: CitySchema) -> Result<Self> {
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .with_context(|| format!("invalid Start Time '{}'", raw.start_time))?;

        let gender = raw.gender.as_deref().filter(|_| schema.has_gender);
        let birth_year = raw.birth_year.filter(|_| schema.has_birth_year);

        let trip = Self::new(
            start_time,
            raw.start_station,
            raw.end_station,
            raw.trip_duration,
            non_blank(Some(&raw.user_type)),
        )
        .with_demographics(non_blank(gender), birth_year);
        Ok(trip)
    }

    /// `"<start> to <end>"` label for this trip's station pair.
    #[must_use]
    pub fn journey(&self) -> String {
        journey_label(&self.start_station, &self.end_station)
    }
}

/// Joins two station names into a journey label.
#[must_use]
pub fn journey_label(start: &str, end: &str) -> String {
    format!("{start} to {end}")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// All trips loaded for one city, after filtering.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub schema: CitySchema,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, schema: CitySchema, trips: Vec<Trip>) -> Self {
        Self {
            city,
            schema,
            trips,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Gender values, or `None` when the city's dataset has no gender column.
    pub fn genders(&self) -> Option<impl Iterator<Item = &str>> {
        self.schema
            .has_gender
            .then(|| self.trips.iter().filter_map(|t| t.gender.as_deref()))
    }

    /// Birth years, or `None` when the city's dataset has no birth-year column.
    pub fn birth_years(&self) -> Option<impl Iterator<Item = f64> + '_> {
        self.schema
            .has_birth_year
            .then(|| self.trips.iter().filter_map(|t| t.birth_year))
    }
}
