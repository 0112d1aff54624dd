//! Month and weekday filtering
//!
//! Selectors are resolved against a `Vocabulary` once, then applied as a pure
//! projection: the source dataset is never touched.

use std::fmt;

use chrono::Weekday;

use crate::core::types::{Dataset, TripRecord};
use crate::core::vocab::{Vocabulary, is_all, weekday_name};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum MonthSelector {
    #[default]
    All,
    /// Calendar month, 1-12
    Month(u32),
}

impl MonthSelector {
    pub(crate) fn parse(input: &str, vocab: &Vocabulary) -> Result<Self, AppError> {
        if is_all(input) {
            return Ok(MonthSelector::All);
        }
        vocab
            .month_number(input)
            .map(MonthSelector::Month)
            .ok_or_else(|| AppError::InvalidFilter {
                kind: "month",
                input: input.trim().to_string(),
            })
    }

    fn matches(self, record: &TripRecord) -> bool {
        match self {
            MonthSelector::All => true,
            MonthSelector::Month(m) => record.month() == m,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DaySelector {
    #[default]
    All,
    Day(Weekday),
}

impl DaySelector {
    pub(crate) fn parse(input: &str, vocab: &Vocabulary) -> Result<Self, AppError> {
        if is_all(input) {
            return Ok(DaySelector::All);
        }
        vocab
            .weekday(input)
            .map(DaySelector::Day)
            .ok_or_else(|| AppError::InvalidFilter {
                kind: "day",
                input: input.trim().to_string(),
            })
    }

    fn matches(self, record: &TripRecord) -> bool {
        match self {
            DaySelector::All => true,
            DaySelector::Day(d) => record.weekday() == d,
        }
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::All => f.write_str("all"),
            MonthSelector::Month(m) => match Vocabulary::english().month_name(*m) {
                Some(name) => f.write_str(name),
                None => write!(f, "month {m}"),
            },
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelector::All => f.write_str("all"),
            DaySelector::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// Month and weekday restriction, combined with AND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TripFilter {
    pub(crate) month: MonthSelector,
    pub(crate) day: DaySelector,
}

impl TripFilter {
    pub(crate) fn new(month: MonthSelector, day: DaySelector) -> Self {
        Self { month, day }
    }

    pub(crate) fn parse(month: &str, day: &str, vocab: &Vocabulary) -> Result<Self, AppError> {
        Ok(Self::new(
            MonthSelector::parse(month, vocab)?,
            DaySelector::parse(day, vocab)?,
        ))
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.month == MonthSelector::All && self.day == DaySelector::All
    }

    pub(crate) fn matches(&self, record: &TripRecord) -> bool {
        self.month.matches(record) && self.day.matches(record)
    }

    pub(crate) fn apply(&self, dataset: &Dataset) -> Dataset {
        let filtered = if self.is_identity() {
            dataset.clone()
        } else {
            dataset.subset(|r| self.matches(r))
        };
        tracing::debug!(
            month = %self.month,
            day = %self.day,
            before = dataset.len(),
            after = filtered.len(),
            "Applied trip filter"
        );
        filtered
    }
}

/// Parse both selectors and narrow the dataset in one step
pub(crate) fn apply(
    dataset: &Dataset,
    month: &str,
    day: &str,
    vocab: &Vocabulary,
) -> Result<Dataset, AppError> {
    let filter = TripFilter::parse(month, day, vocab)?;
    Ok(filter.apply(dataset))
}
