//! Statistics over a filtered dataset
//!
//! The four groups are independent and read-only, so `compute_report` runs
//! them in parallel and only assembles the results.

pub(crate) mod duration;
pub(crate) mod station;
pub(crate) mod time;
pub(crate) mod user;

use std::hash::Hash;
use std::time::Instant;

use serde::Serialize;

use crate::core::{Dataset, Tally};
use crate::error::AppError;

pub(crate) use duration::DurationStats;
pub(crate) use station::StationStats;
pub(crate) use time::TimeStats;
pub(crate) use user::{CategoryCount, UserStats};

/// Most frequent value and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Mode<T> {
    pub(crate) value: T,
    pub(crate) count: usize,
}

impl<T: Clone + Eq + Hash> Mode<T> {
    pub(crate) fn from_tally(tally: &Tally<T>) -> Result<Self, AppError> {
        tally
            .mode()
            .map(|(value, count)| Mode {
                value: value.clone(),
                count,
            })
            .ok_or(AppError::EmptyDataset)
    }
}

impl<T> Mode<T> {
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Mode<U> {
        Mode {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// All four statistic groups for one filtered dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Report {
    pub(crate) time: TimeStats,
    pub(crate) station: StationStats,
    pub(crate) duration: DurationStats,
    pub(crate) user: UserStats,
}

pub(crate) fn compute_report(dataset: &Dataset) -> Result<Report, AppError> {
    if dataset.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    let start = Instant::now();
    let ((time, station), (duration, user)) = rayon::join(
        || rayon::join(|| time::compute(dataset), || station::compute(dataset)),
        || rayon::join(|| duration::compute(dataset), || user::compute(dataset)),
    );
    let report = Report {
        time: time?,
        station: station?,
        duration: duration?,
        user: user?,
    };
    tracing::debug!(
        rows = dataset.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Computed statistics"
    );
    Ok(report)
}
