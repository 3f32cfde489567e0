use chrono::Timelike;

use crate::calendar::month_name;
use crate::records::TripTable;
use crate::stats::mode;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub month_name: &'static str,
    pub day_of_week: &'static str,
    pub hour: u32,
}

impl TimeStats {
    /// Mode of month, weekday name and start hour. `None` for an empty table.
    ///
    /// The hour is derived from `start_time` here rather than at load.
    pub fn from_table(table: &TripTable) -> Option<Self> {
        let month = mode(table.iter().map(|t| t.month))?;
        let day_of_week = mode(table.iter().map(|t| t.day_of_week))?;
        let hour = mode(table.iter().map(|t| t.start_time.hour()))?;

        Some(Self {
            month,
            month_name: month_name(month)?,
            day_of_week,
            hour,
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

    fn table(times: &[&str]) -> TripTable {
        let trips = times
            .iter()
            .map(|ts| Trip::new(test_time(ts), "A", "B", 60.0, Some("Subscriber")))
            .collect();
        TripTable::new(City::Chicago, CitySchema::DEMOGRAPHIC, trips)
    }

    #[test]
    fn test_time_stats() {
        let stats = TimeStats::from_table(&table(&[
            "2017-03-01 08:00:00",
            "2017-03-08 08:30:00",
            "2017-01-02 17:00:00",
        ]))
        .unwrap();

        assert_eq!(stats.month, 3);
        assert_eq!(stats.month_name, "March");
        assert_eq!(stats.day_of_week, "Wednesday");
        assert_eq!(stats.hour, 8);
    }

    #[test]
    fn test_ties_take_lowest_value() {
        // one trip in February at 17h on a Thursday, one in May at 9h on a Monday
        let stats = TimeStats::from_table(&table(&["2017-05-01 09:00:00", "2017-02-02 17:00:00"]))
            .unwrap();

        assert_eq!(stats.month_name, "February");
        assert_eq!(stats.day_of_week, "Monday");
        assert_eq!(stats.hour, 9);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(TimeStats::from_table(&table(&[])), None);
    }
}
