//! Core module - trip model, vocabulary, filtering and counting

mod filter;
mod tally;
mod types;
mod vocab;

pub(crate) use filter::{DaySelector, MonthSelector, TripFilter, apply};
pub(crate) use tally::Tally;
pub(crate) use types::{Capabilities, Dataset, TripFields, TripRecord};
pub(crate) use vocab::{Vocabulary, title_case};

#[cfg(test)]
pub(crate) use types::fixtures;
