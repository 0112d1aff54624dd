//! City sources backed by the published bike-share CSV exports

use crate::core::Capabilities;
use crate::source::Source;

/// A city whose trips live in one CSV file
#[derive(Debug, Clone, Copy)]
pub(crate) struct CitySource {
    name: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    file_name: &'static str,
    has_demographics: bool,
}

impl CitySource {
    pub(crate) const fn chicago() -> Self {
        Self {
            name: "chicago",
            display_name: "Chicago",
            aliases: &["chi"],
            file_name: "chicago.csv",
            has_demographics: true,
        }
    }

    pub(crate) const fn new_york_city() -> Self {
        Self {
            name: "new_york_city",
            display_name: "New York City",
            aliases: &["new_york", "nyc"],
            file_name: "new_york_city.csv",
            has_demographics: true,
        }
    }

    /// Washington publishes no gender or birth year columns
    pub(crate) const fn washington() -> Self {
        Self {
            name: "washington",
            display_name: "Washington",
            aliases: &["dc", "washington_dc"],
            file_name: "washington.csv",
            has_demographics: false,
        }
    }
}

impl Source for CitySource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            has_demographics: self.has_demographics,
        }
    }

    fn file_name(&self) -> &'static str {
        self.file_name
    }
}
