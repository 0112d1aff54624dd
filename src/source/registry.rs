//! City registry
//!
//! The closed set of supported cities, looked up by name or alias.

use std::sync::LazyLock;

use super::city::CitySource;
use super::{BoxedSource, Source};
use crate::error::AppError;

/// All registered cities
static SOURCES: LazyLock<Vec<BoxedSource>> = LazyLock::new(|| {
    vec![
        Box::new(CitySource::chicago()),
        Box::new(CitySource::new_york_city()),
        Box::new(CitySource::washington()),
    ]
});

/// Lower-case and fold spaces/dashes to underscores: "New York" → "new_york"
fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Get a city by name or alias
pub(crate) fn get_source(name: &str) -> Option<&'static dyn Source> {
    let key = normalize(name);
    SOURCES.iter().find_map(|s: &BoxedSource| {
        if s.name() == key || s.aliases().contains(&key.as_str()) {
            Some(s.as_ref())
        } else {
            None
        }
    })
}

pub(crate) fn resolve_city(name: &str) -> Result<&'static dyn Source, AppError> {
    get_source(name).ok_or_else(|| AppError::UnknownCity {
        input: name.trim().to_string(),
    })
}

pub(crate) fn all_sources() -> impl Iterator<Item = &'static dyn Source> {
    SOURCES.iter().map(|s| s.as_ref())
}
