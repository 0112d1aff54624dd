mod cities;
mod format;
mod json;
mod raw;
mod report;

pub(crate) use cities::render_cities_table;
pub(crate) use format::NumberFormat;
pub(crate) use json::{output_cities_json, output_raw_json, output_report_json};
pub(crate) use raw::render_raw_table;
pub(crate) use report::{ReportSummary, TableOptions, print_report, render_report};
