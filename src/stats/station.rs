//! Most popular stations and trip

use serde::Serialize;

use crate::core::{Dataset, Tally};
use crate::error::AppError;
use crate::stats::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct StationPair {
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StationStats {
    pub(crate) common_start_station: Mode<String>,
    pub(crate) common_end_station: Mode<String>,
    /// Pairs the two most common stations above; not a trip that necessarily occurred
    pub(crate) common_pair_description: String,
    /// Most frequent (start, end) combination actually ridden
    pub(crate) common_trip: StationPair,
}

pub(crate) fn describe_pair(start: &str, end: &str) -> String {
    format!("Start Station - {start}; End Station - {end}")
}

pub(crate) fn compute(dataset: &Dataset) -> Result<StationStats, AppError> {
    let records = dataset.records();
    let starts: Tally<&str> = records.iter().map(|r| r.start_station.as_str()).collect();
    let ends: Tally<&str> = records.iter().map(|r| r.end_station.as_str()).collect();
    let pairs: Tally<(&str, &str)> = records
        .iter()
        .map(|r| (r.start_station.as_str(), r.end_station.as_str()))
        .collect();

    let common_start_station = Mode::from_tally(&starts)?.map(str::to_string);
    let common_end_station = Mode::from_tally(&ends)?.map(str::to_string);
    let ((start, end), count) = pairs.mode().ok_or(AppError::EmptyDataset)?;

    Ok(StationStats {
        common_pair_description: describe_pair(
            &common_start_station.value,
            &common_end_station.value,
        ),
        common_start_station,
        common_end_station,
        common_trip: StationPair {
            start_station: (*start).to_string(),
            end_station: (*end).to_string(),
            count,
        },
    })
}
