//! Rider statistics: user types, and gender/birth year where the city records them

use serde::Serialize;

use crate::core::{Dataset, Tally};
use crate::error::AppError;
use crate::stats::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CategoryCount {
    pub(crate) value: String,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BirthYearStats {
    pub(crate) earliest: i32,
    pub(crate) latest: i32,
    pub(crate) most_common: Mode<i32>,
}

/// Present only for cities whose schema has demographic columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Demographics {
    pub(crate) gender_counts: Vec<CategoryCount>,
    /// Absent when no remaining row has a birth year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct UserStats {
    /// Descending by count
    pub(crate) user_type_counts: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) demographics: Option<Demographics>,
}

fn ranked(tally: Tally<&str>) -> Vec<CategoryCount> {
    tally
        .into_ranked()
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    let years: Vec<i32> = dataset
        .records()
        .iter()
        .filter_map(|r| r.birth_year)
        .collect();
    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;
    let tally: Tally<i32> = years.into_iter().collect();
    let most_common = Mode::from_tally(&tally).ok()?;
    Some(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}

pub(crate) fn compute(dataset: &Dataset) -> Result<UserStats, AppError> {
    if dataset.is_empty() {
        return Err(AppError::EmptyDataset);
    }
    let records = dataset.records();

    let user_types: Tally<&str> = records
        .iter()
        .filter_map(|r| r.user_type.as_deref())
        .collect();

    let demographics = if dataset.capabilities().has_demographics {
        let genders: Tally<&str> = records.iter().filter_map(|r| r.gender.as_deref()).collect();
        Some(Demographics {
            gender_counts: ranked(genders),
            birth_years: birth_year_stats(dataset),
        })
    } else {
        None
    };

    Ok(UserStats {
        user_type_counts: ranked(user_types),
        demographics,
    })
}
