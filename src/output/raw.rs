use comfy_table::Table;

use crate::consts::DATETIME_FORMAT;
use crate::core::{Dataset, TripRecord};
use crate::output::format::{
    NumberFormat, create_styled_table, format_count, format_number, header_cell, right_cell,
    styled_cell,
};

/// Window of `limit` rows starting at `offset`, clamped to the dataset
pub(crate) fn page(records: &[TripRecord], offset: usize, limit: usize) -> &[TripRecord] {
    let start = offset.min(records.len());
    let end = start.saturating_add(limit).min(records.len());
    &records[start..end]
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

pub(crate) fn render_raw_table(
    dataset: &Dataset,
    offset: usize,
    limit: usize,
    use_color: bool,
    number_format: NumberFormat,
) -> String {
    let rows = page(dataset.records(), offset, limit);
    let demographics = dataset.capabilities().has_demographics;

    let mut headers = vec![
        "#",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if demographics {
        headers.extend(["Gender", "Birth Year"]);
    }

    let mut table: Table = create_styled_table();
    table.set_header(
        headers
            .iter()
            .map(|h| header_cell(h, use_color))
            .collect::<Vec<_>>(),
    );

    for (i, r) in rows.iter().enumerate() {
        let mut cells = vec![
            right_cell(&(offset + i).to_string(), None, false),
            styled_cell(&r.start_time.format(DATETIME_FORMAT).to_string(), None, false),
            styled_cell(&r.end_time.format(DATETIME_FORMAT).to_string(), None, false),
            right_cell(&format_number(r.trip_duration, number_format), None, false),
            styled_cell(&r.start_station, None, false),
            styled_cell(&r.end_station, None, false),
            styled_cell(&optional(r.user_type.as_deref()), None, false),
        ];
        if demographics {
            cells.push(styled_cell(&optional(r.gender.as_deref()), None, false));
            cells.push(right_cell(
                &r.birth_year.map(|y| y.to_string()).unwrap_or_default(),
                None,
                false,
            ));
        }
        table.add_row(cells);
    }

    let shown_end = offset.min(dataset.len()) + rows.len();
    format!(
        "{table}\n  Rows {}-{} of {}\n",
        format_count(offset.min(dataset.len()), number_format),
        format_count(shown_end, number_format),
        format_count(dataset.len(), number_format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{at, dataset, demographic_dataset, trip};

    fn five() -> Vec<TripRecord> {
        (0..7)
            .map(|i| trip(at(2017, 1, 2, 8, i), 100 + i64::from(i)))
            .collect()
    }

    #[test]
    fn page_clamps_to_bounds() {
        let rows = five();
        assert_eq!(page(&rows, 0, 5).len(), 5);
        assert_eq!(page(&rows, 5, 5).len(), 2);
        assert!(page(&rows, 7, 5).is_empty());
        assert!(page(&rows, 100, 5).is_empty());
        assert_eq!(page(&rows, 2, usize::MAX).len(), 5);
    }

    #[test]
    fn page_keeps_source_order() {
        let rows = five();
        let p = page(&rows, 5, 5);
        assert_eq!(p[0].trip_duration, 105);
        assert_eq!(p[1].trip_duration, 106);
    }

    #[test]
    fn raw_table_shows_rows_and_range() {
        let ds = dataset(five());
        let text = render_raw_table(&ds, 5, 5, false, NumberFormat::default());
        assert!(text.contains("2017-01-02 08:05:00"));
        assert!(text.contains("Rows 5-7 of 7"));
        assert!(!text.contains("Birth Year"));
    }

    #[test]
    fn raw_table_adds_demographic_columns() {
        let mut t = trip(at(2017, 1, 2, 8, 0), 60);
        t.gender = Some("Male".to_string());
        t.birth_year = Some(1990);
        let text = render_raw_table(&demographic_dataset(vec![t]), 0, 5, false, NumberFormat::default());
        assert!(text.contains("Birth Year"));
        assert!(text.contains("Male"));
        assert!(text.contains("1990"));
    }
}
