//! Trip data sources
//!
//! Each supported city implements the Source trait to describe where its trip
//! file lives and which columns it carries.

pub(crate) mod city;
pub(crate) mod loader;
pub(crate) mod registry;

use std::path::{Path, PathBuf};

use crate::core::Capabilities;

/// Data source trait - implemented by each city
pub(crate) trait Source: Send + Sync {
    /// Unique name for this source (used on the command line)
    fn name(&self) -> &'static str;

    /// Display name for output
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// Alternate spellings accepted on the command line
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Schema capabilities of this source
    fn capabilities(&self) -> Capabilities;

    /// CSV file name inside the data directory
    fn file_name(&self) -> &'static str;

    fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn Source>;

pub(crate) use loader::load;
pub(crate) use registry::{all_sources, resolve_city};
