//! Reads a city's trip CSV into a [`TripTable`] and applies the month/day filters.

use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{Catalog, CityDataset};
use crate::filters::{DayFilter, FilterSelection, MonthFilter};
use crate::records::{RawTrip, Trip, TripTable};

/// Loads the selected city's dataset and keeps only trips matching the
/// selection's month and day.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a required column is
/// missing, or any row has an unparsable timestamp or duration.
#[tracing::instrument(skip(catalog), fields(selection = %selection))]
pub fn load_data(catalog: &Catalog, selection: &FilterSelection) -> Result<TripTable> {
    let dataset = catalog.dataset(selection.city)?;
    let file = File::open(&dataset.path)
        .with_context(|| format!("failed to open {}", dataset.path.display()))?;

    let table = read_trips(file, &dataset)?;
    let loaded = table.len();

    let table = apply_filters(table, selection.month, selection.day);
    info!(city = %table.city, loaded, kept = table.len(), "Trips loaded");

    Ok(table)
}

/// Deserializes every row of a trip CSV.
///
/// # Errors
///
/// Fails on the first row that cannot be read or converted.
pub fn read_trips<R: Read>(reader: R, dataset: &CityDataset) -> Result<TripTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();

    for (idx, result) in rdr.deserialize().enumerate() {
        // header is line 1
        let line = idx + 2;
        let raw: RawTrip = result
            .with_context(|| format!("{}: malformed row at line {line}", dataset.path.display()))?;
        let trip = Trip::from_raw(raw, dataset.schema)
            .with_context(|| format!("{}: line {line}", dataset.path.display()))?;
        trips.push(trip);
    }

    debug!(path = %dataset.path.display(), rows = trips.len(), "CSV read");
    Ok(TripTable::new(dataset.city, dataset.schema, trips))
}

/// Removes trips outside the month and day filters. Never adds rows.
#[must_use]
pub fn apply_filters(mut table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    if let Some(number) = month.month_number() {
        table.trips.retain(|t| t.month == number);
    }

    if let Some(name) = day.day_name() {
        table.trips.retain(|t| t.day_of_week == name);
    }

    table
}
