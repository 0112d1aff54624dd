//! Month and weekday names used to resolve filter selectors
//!
//! The vocabulary is a value, not global state: tests and callers can hand
//! the filter parser an alternate set of names.

use chrono::Weekday;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Keyword meaning "no restriction", matched case-insensitively
const ALL: &str = "all";

/// Month names (January first) and weekday names (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Vocabulary {
    months: [&'static str; 12],
    days: [&'static str; 7],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}

impl Vocabulary {
    pub(crate) const fn new(months: [&'static str; 12], days: [&'static str; 7]) -> Self {
        Self { months, days }
    }

    pub(crate) const fn english() -> Self {
        Self::new(ENGLISH_MONTHS, ENGLISH_DAYS)
    }

    pub(crate) fn months(&self) -> &[&'static str] {
        &self.months
    }

    pub(crate) fn days(&self) -> &[&'static str] {
        &self.days
    }

    /// Resolve a month name to 1-12
    pub(crate) fn month_number(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        self.months
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))
            .map(|i| i as u32 + 1)
    }

    pub(crate) fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(index).copied()
    }

    pub(crate) fn weekday(&self, name: &str) -> Option<Weekday> {
        let name = name.trim();
        self.days
            .iter()
            .position(|d| d.eq_ignore_ascii_case(name))
            .and_then(|i| WEEKDAYS.get(i).copied())
    }
}

/// Canonical English weekday name, used for the derived `day_of_week`
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    ENGLISH_DAYS[weekday.num_days_from_monday() as usize]
}

pub(crate) fn is_all(selector: &str) -> bool {
    selector.trim().eq_ignore_ascii_case(ALL)
}

/// Upper-case the first letter of every word, lower-case the rest
pub(crate) fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
