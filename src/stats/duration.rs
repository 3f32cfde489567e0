use crate::records::TripTable;
use crate::stats::mean;

/// Total and mean trip duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

impl DurationStats {
    pub fn from_table(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let durations: Vec<f64> = table.iter().map(|t| t.trip_duration).collect();
        Some(Self {
            total: durations.iter().sum(),
            mean: mean(&durations),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CitySchema;
    use crate::filters::City;
    use crate::records::Trip;
    use crate::stats::test_time;

    fn table(durations: &[f64]) -> TripTable {
        let trips = durations
            .iter()
            .map(|d| Trip::new(test_time("2017-02-10 07:00:00"), "A", "B", *d, None))
            .collect();
        TripTable::new(City::Washington, CitySchema::BASIC, trips)
    }

    #[test]
    fn test_duration_stats() {
        let stats = DurationStats::from_table(&table(&[300.0, 600.0, 1200.5])).unwrap();

        assert_eq!(stats.total, 2100.5);
        assert!((stats.mean - 700.1666).abs() < 1e-3);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(DurationStats::from_table(&table(&[])), None);
    }
}
