//! CSV loader for city trip files
//!
//! Columns are located by header name, so extra or reordered columns (the
//! exports carry an unnamed index column) are harmless. Whether `Gender` and
//! `Birth Year` are read is decided by the city's capabilities, not by probing.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ErrorKind, ReaderBuilder, StringRecord};

use crate::consts::{
    COL_BIRTH_YEAR, COL_END_STATION, COL_END_TIME, COL_GENDER, COL_START_STATION,
    COL_START_TIME, COL_TRIP_DURATION, COL_USER_TYPE,
};
use crate::core::{Dataset, TripFields, TripRecord};
use crate::error::AppError;
use crate::source::Source;
use crate::utils::parse_timestamp;

/// Header positions of the columns we read
#[derive(Debug, Clone, Copy)]
struct Columns {
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    /// (gender, birth year), only for cities with demographics
    demographics: Option<(usize, usize)>,
}

impl Columns {
    fn resolve(headers: &StringRecord, source: &dyn Source) -> Result<Self, AppError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| AppError::MissingColumn {
                    column,
                    source_name: source.display_name().to_string(),
                })
        };

        let demographics = if source.capabilities().has_demographics {
            Some((find(COL_GENDER)?, find(COL_BIRTH_YEAR)?))
        } else {
            None
        };

        Ok(Columns {
            start_time: find(COL_START_TIME)?,
            end_time: find(COL_END_TIME)?,
            trip_duration: find(COL_TRIP_DURATION)?,
            start_station: find(COL_START_STATION)?,
            end_station: find(COL_END_STATION)?,
            user_type: find(COL_USER_TYPE)?,
            demographics,
        })
    }
}

/// Column label for errors that concern the row as a whole
const WHOLE_ROW: &str = "(row)";

/// Column label for a header we don't read
const UNREAD_COLUMN: &str = "(unread)";

impl Columns {
    fn name_of(&self, index: usize) -> &'static str {
        let mut named = vec![
            (self.start_time, COL_START_TIME),
            (self.end_time, COL_END_TIME),
            (self.trip_duration, COL_TRIP_DURATION),
            (self.start_station, COL_START_STATION),
            (self.end_station, COL_END_STATION),
            (self.user_type, COL_USER_TYPE),
        ];
        if let Some((gender, birth_year)) = self.demographics {
            named.extend([(gender, COL_GENDER), (birth_year, COL_BIRTH_YEAR)]);
        }
        named
            .into_iter()
            .find_map(|(i, name)| (i == index).then_some(name))
            .unwrap_or(UNREAD_COLUMN)
    }
}

/// Turn reader failures that belong to one row into `MalformedRecord`
fn row_error(err: csv::Error, row: usize, columns: &Columns) -> AppError {
    let malformed = match err.kind() {
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => Some((
            pos.as_ref().map(|p| p.line()),
            WHOLE_ROW,
            format!("expected {expected_len} fields, found {len}"),
        )),
        ErrorKind::Utf8 { pos, err: utf8 } => Some((
            pos.as_ref().map(|p| p.line()),
            columns.name_of(utf8.field()),
            "invalid UTF-8".to_string(),
        )),
        _ => None,
    };

    match malformed {
        Some((line, column, reason)) => AppError::MalformedRecord {
            row,
            line: line.unwrap_or(0),
            column,
            reason,
        },
        None => AppError::Csv(err),
    }
}

/// One CSV row being converted, with enough position info for error messages
struct RowContext<'r> {
    record: &'r StringRecord,
    row: usize,
    line: u64,
}

impl<'r> RowContext<'r> {
    fn field(&self, index: usize) -> &'r str {
        self.record.get(index).unwrap_or("").trim()
    }

    fn optional(&self, index: usize) -> Option<&'r str> {
        Some(self.field(index)).filter(|v| !v.is_empty())
    }

    fn malformed(&self, column: &'static str, reason: String) -> AppError {
        AppError::MalformedRecord {
            row: self.row,
            line: self.line,
            column,
            reason,
        }
    }

    fn timestamp(&self, index: usize, column: &'static str) -> Result<chrono::NaiveDateTime, AppError> {
        let raw = self.field(index);
        parse_timestamp(raw)
            .ok_or_else(|| self.malformed(column, format!("invalid timestamp \"{raw}\"")))
    }

    fn whole_number(&self, raw: &str, column: &'static str) -> Result<i64, AppError> {
        parse_whole_number(raw)
            .ok_or_else(|| self.malformed(column, format!("invalid number \"{raw}\"")))
    }
}

/// Integers as-is; decimals ("1039.0") round half away from zero
fn parse_whole_number(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let rounded = value.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

fn parse_record(ctx: &RowContext<'_>, columns: &Columns) -> Result<TripRecord, AppError> {
    let start_time = ctx.timestamp(columns.start_time, COL_START_TIME)?;
    let end_time = ctx.timestamp(columns.end_time, COL_END_TIME)?;
    let trip_duration = ctx.whole_number(ctx.field(columns.trip_duration), COL_TRIP_DURATION)?;

    let (gender, birth_year) = match columns.demographics {
        Some((gender_idx, year_idx)) => {
            let birth_year = match ctx.optional(year_idx) {
                Some(raw) => {
                    let year = ctx.whole_number(raw, COL_BIRTH_YEAR)?;
                    let year = i32::try_from(year).map_err(|_| {
                        ctx.malformed(COL_BIRTH_YEAR, format!("year out of range \"{raw}\""))
                    })?;
                    Some(year)
                }
                None => None,
            };
            (ctx.optional(gender_idx).map(str::to_string), birth_year)
        }
        None => (None, None),
    };

    Ok(TripRecord::new(TripFields {
        start_time,
        end_time,
        trip_duration,
        start_station: ctx.field(columns.start_station).to_string(),
        end_station: ctx.field(columns.end_station).to_string(),
        user_type: ctx.optional(columns.user_type).map(str::to_string),
        gender,
        birth_year,
    }))
}

/// Parse a city's trips from any CSV reader
pub(crate) fn load_from_reader<R: Read>(source: &dyn Source, reader: R) -> Result<Dataset, AppError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let columns = Columns::resolve(&headers, source)?;

    let mut records = Vec::new();
    let mut raw = StringRecord::new();
    let mut row = 0usize;
    while csv_reader
        .read_record(&mut raw)
        .map_err(|e| row_error(e, row + 1, &columns))?
    {
        row += 1;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let ctx = RowContext {
            record: &raw,
            row,
            line,
        };
        records.push(parse_record(&ctx, &columns)?);
    }

    Ok(Dataset::new(
        source.display_name(),
        source.capabilities(),
        records,
    ))
}

/// Load every trip for a city from `data_dir`
pub(crate) fn load(source: &dyn Source, data_dir: &Path) -> Result<Dataset, AppError> {
    let path = source.data_path(data_dir);
    let load_start = Instant::now();
    let file = File::open(&path).map_err(|e| AppError::Io {
        path: path.clone(),
        source: e,
    })?;
    let dataset = load_from_reader(source, file)?;

    tracing::debug!(
        city = source.name(),
        path = %path.display(),
        rows = dataset.len(),
        elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0,
        "Loaded trip data"
    );
    Ok(dataset)
}
