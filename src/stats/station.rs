use crate::records::TripTable;
use crate::stats::mode;

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub journey: String,
}

impl StationStats {
    pub fn from_table(table: &TripTable) -> Option<Self> {
        let start_station = mode(table.iter().map(|t| t.start_station.as_str()))?;
        let end_station = mode(table.iter().map(|t| t.end_station.as_str()))?;
        let journey = mode(table.iter().map(|t| t.journey()))?;

        Some(Self {
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            journey,
        })
    }
}
