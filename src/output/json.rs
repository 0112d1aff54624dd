use serde_json::{Value, json};

use crate::consts::DATETIME_FORMAT;
use crate::core::{Dataset, TripRecord};
use crate::output::raw::page;
use crate::output::report::ReportSummary;
use crate::source::Source;
use crate::stats::Report;

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

pub(crate) fn output_report_json(report: &Report, summary: &ReportSummary<'_>) -> String {
    let output = json!({
        "city": summary.city,
        "filter": {
            "month": summary.filter.month.to_string(),
            "day": summary.filter.day.to_string(),
        },
        "rows_loaded": summary.rows_loaded,
        "rows_analyzed": summary.rows_analyzed,
        "statistics": report,
    });
    to_pretty(&output)
}

fn row_json(index: usize, r: &TripRecord, demographics: bool) -> Value {
    let mut row = json!({
        "index": index,
        "start_time": r.start_time.format(DATETIME_FORMAT).to_string(),
        "end_time": r.end_time.format(DATETIME_FORMAT).to_string(),
        "trip_duration": r.trip_duration,
        "start_station": r.start_station,
        "end_station": r.end_station,
        "user_type": r.user_type,
        "month": r.month(),
        "day_of_week": r.day_name(),
    });
    if demographics && let Some(obj) = row.as_object_mut() {
        obj.insert("gender".to_string(), json!(r.gender));
        obj.insert("birth_year".to_string(), json!(r.birth_year));
    }
    row
}

pub(crate) fn output_raw_json(dataset: &Dataset, offset: usize, limit: usize) -> String {
    let demographics = dataset.capabilities().has_demographics;
    let rows: Vec<Value> = page(dataset.records(), offset, limit)
        .iter()
        .enumerate()
        .map(|(i, r)| row_json(offset + i, r, demographics))
        .collect();
    let output = json!({
        "city": dataset.city(),
        "offset": offset,
        "total_rows": dataset.len(),
        "rows": rows,
    });
    to_pretty(&output)
}

pub(crate) fn output_cities_json<'a>(sources: impl Iterator<Item = &'a dyn Source>) -> String {
    let cities: Vec<Value> = sources
        .map(|s| {
            json!({
                "name": s.name(),
                "display_name": s.display_name(),
                "aliases": s.aliases(),
                "file": s.file_name(),
                "has_demographics": s.capabilities().has_demographics,
            })
        })
        .collect();
    to_pretty(&Value::Array(cities))
}
