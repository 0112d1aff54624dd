//! Most frequent times of travel

use serde::Serialize;

use crate::core::{Dataset, Tally};
use crate::error::AppError;
use crate::stats::Mode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TimeStats {
    /// Calendar month, 1-12
    pub(crate) common_month: Mode<u32>,
    pub(crate) common_weekday: Mode<String>,
    /// Hour of day, 0-23
    pub(crate) common_hour: Mode<u32>,
}

pub(crate) fn compute(dataset: &Dataset) -> Result<TimeStats, AppError> {
    let records = dataset.records();
    let months: Tally<u32> = records.iter().map(|r| r.month()).collect();
    let weekdays: Tally<&str> = records.iter().map(|r| r.day_name()).collect();
    let hours: Tally<u32> = records.iter().map(|r| r.start_hour()).collect();

    Ok(TimeStats {
        common_month: Mode::from_tally(&months)?,
        common_weekday: Mode::from_tally(&weekdays)?.map(str::to_string),
        common_hour: Mode::from_tally(&hours)?,
    })
}
