use crate::records::TripTable;
use crate::stats::{mode, value_counts};

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// User type breakdown plus the demographic sections the city supports.
///
/// `genders` and `birth_years` are `None` when the city's schema has no such
/// column. `birth_years` is also `None` when no remaining trip has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn from_table(table: &TripTable) -> Self {
        let user_types = owned(value_counts(
            table.iter().filter_map(|t| t.user_type.as_deref()),
        ));
        let genders = table.genders().map(|g| owned(value_counts(g)));
        let birth_years = table
            .birth_years()
            .and_then(|years| birth_year_stats(years.map(|y| y as i64).collect()));

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn birth_year_stats(years: Vec<i64>) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years)?,
    })
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, n)| (value.to_string(), n))
        .collect()
}
