//! Total and average trip duration

use serde::Serialize;

use crate::core::Dataset;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DurationStats {
    pub(crate) trip_count: usize,
    /// Seconds
    pub(crate) total_duration: i64,
    /// Seconds, rounded to 2 decimals half away from zero
    pub(crate) mean_duration: f64,
    pub(crate) shortest: i64,
    pub(crate) longest: i64,
}

pub(crate) fn compute(dataset: &Dataset) -> Result<DurationStats, AppError> {
    let records = dataset.records();
    if records.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    let mut total: i64 = 0;
    let mut shortest = i64::MAX;
    let mut longest = i64::MIN;
    for r in records {
        total = total
            .checked_add(r.trip_duration)
            .ok_or(AppError::DurationOverflow {
                trips: records.len(),
            })?;
        shortest = shortest.min(r.trip_duration);
        longest = longest.max(r.trip_duration);
    }

    Ok(DurationStats {
        trip_count: records.len(),
        total_duration: total,
        mean_duration: rounded_mean(total, records.len()),
        shortest,
        longest,
    })
}

/// `total / count` to 2 decimals, exact integer rounding (half away from zero)
pub(crate) fn rounded_mean(total: i64, count: usize) -> f64 {
    let scaled = i128::from(total) * 100;
    let n = count.max(1) as i128;
    let quotient = scaled / n;
    let remainder = scaled % n;
    let centis = if 2 * remainder.abs() >= n {
        quotient + scaled.signum()
    } else {
        quotient
    };
    centis as f64 / 100.0
}
