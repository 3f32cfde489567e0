//! Console reports for a loaded [`TripTable`].
//!
//! Each reporter prints a heading, its statistics, and how long it took.
//! The timing covers only that reporter's own work.

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::records::TripTable;
use crate::stats::duration::DurationStats;
use crate::stats::station::StationStats;
use crate::stats::time::TimeStats;
use crate::stats::users::UserStats;

const NO_TRIPS: &str = "No trips to summarize.";

/// Runs all four reporters in order.
pub fn print_all<W: Write + ?Sized>(table: &TripTable, out: &mut W) -> Result<()> {
    time_stats(table, out)?;
    station_stats(table, out)?;
    trip_duration_stats(table, out)?;
    user_stats(table, out)?;
    Ok(())
}

/// Displays statistics on the most frequent times of travel.
pub fn time_stats<W: Write + ?Sized>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let start = Instant::now();

    match TimeStats::from_table(table) {
        Some(stats) => {
            writeln!(out, "The most common month: {}", stats.month_name)?;
            writeln!(out, "The most common day of the week: {}", stats.day_of_week)?;
            writeln!(out, "The most common start hour: {}", stats.hour)?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, "time", start)
}

/// Displays the most popular stations and trip.
pub fn station_stats<W: Write + ?Sized>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let start = Instant::now();

    match StationStats::from_table(table) {
        Some(stats) => {
            writeln!(out, "The most common start station is: {}", stats.start_station)?;
            writeln!(out, "The most common end station is: {}", stats.end_station)?;
            writeln!(out, "The most common trip taken is {}", stats.journey)?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, "station", start)
}

/// Displays the total and average trip duration in seconds.
pub fn trip_duration_stats<W: Write + ?Sized>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let start = Instant::now();

    match DurationStats::from_table(table) {
        Some(stats) => {
            writeln!(out, "The total travel time is: {}", stats.total)?;
            writeln!(out, "The mean travel time is: {:?}", stats.mean)?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, "duration", start)
}

/// Displays user type counts, and gender and birth year where the city has them.
pub fn user_stats<W: Write + ?Sized>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let start = Instant::now();

    let stats = UserStats::from_table(table);

    writeln!(out, "The counts of user types are as follows: ")?;
    write_counts(out, &stats.user_types)?;
    writeln!(out)?;

    if let Some(genders) = &stats.genders {
        writeln!(out, "The counts of gender are as follows: ")?;
        write_counts(out, genders)?;
        writeln!(out)?;
    }

    if let Some(years) = &stats.birth_years {
        writeln!(
            out,
            "The earliest, most recent, and the most common year of birth are {}, {} and {} respectively",
            years.earliest, years.most_recent, years.most_common
        )?;
    }

    footer(out, "users", start)
}

fn write_counts<W: Write + ?Sized>(out: &mut W, counts: &[(String, usize)]) -> Result<()> {
    let width = counts.iter().map(|(value, _)| value.len()).max().unwrap_or(0);
    for (value, n) in counts {
        writeln!(out, "{value:<width$}    {n}")?;
    }
    Ok(())
}

fn footer<W: Write + ?Sized>(out: &mut W, reporter: &str, start: Instant) -> Result<()> {
    let elapsed = start.elapsed();
    debug!(reporter, elapsed_ms = elapsed.as_millis() as u64, "Report complete");

    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(40))?;
    Ok(())
}
