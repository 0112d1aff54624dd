//! Core data types shared by loading, filtering and the statistics modules
//!
//! A `TripRecord` carries its derived calendar fields from construction on,
//! so `month` and `weekday` can never disagree with `start_time`.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::core::vocab::weekday_name;

/// Schema capabilities of a city's trip file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Capabilities {
    /// File carries `Gender` and `Birth Year` columns
    pub(crate) has_demographics: bool,
}

/// One trip, with month and weekday derived from `start_time`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TripRecord {
    pub(crate) start_time: NaiveDateTime,
    pub(crate) end_time: NaiveDateTime,
    /// Seconds
    pub(crate) trip_duration: i64,
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    pub(crate) user_type: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<i32>,
    month: u32,
    weekday: Weekday,
}

/// Builder-style input for `TripRecord::new`
#[derive(Debug, Clone)]
pub(crate) struct TripFields {
    pub(crate) start_time: NaiveDateTime,
    pub(crate) end_time: NaiveDateTime,
    pub(crate) trip_duration: i64,
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    pub(crate) user_type: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<i32>,
}

impl TripRecord {
    pub(crate) fn new(fields: TripFields) -> Self {
        let TripFields {
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        } = fields;
        TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    /// Calendar month of the start time, 1-12
    pub(crate) fn month(&self) -> u32 {
        self.month
    }

    pub(crate) fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Full weekday name, e.g. "Monday"
    pub(crate) fn day_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub(crate) fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Ordered trips for one city
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Dataset {
    city: String,
    capabilities: Capabilities,
    records: Vec<TripRecord>,
}

impl Dataset {
    pub(crate) fn new(
        city: impl Into<String>,
        capabilities: Capabilities,
        records: Vec<TripRecord>,
    ) -> Self {
        Self {
            city: city.into(),
            capabilities,
            records,
        }
    }

    /// Display name of the city the trips belong to
    pub(crate) fn city(&self) -> &str {
        &self.city
    }

    pub(crate) fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub(crate) fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New dataset holding the matching records in their original order
    pub(crate) fn subset<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&TripRecord) -> bool,
    {
        Dataset {
            city: self.city.clone(),
            capabilities: self.capabilities,
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
