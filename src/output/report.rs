use std::fmt::Write;

use comfy_table::{Color, Table};

use crate::core::{TripFilter, Vocabulary};
use crate::output::format::{
    NumberFormat, create_styled_table, format_count, format_decimal, format_duration,
    format_number, header_cell, right_cell, styled_cell,
};
use crate::stats::{CategoryCount, Report, user::Demographics};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

/// What was analyzed, for the heading and summary line
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportSummary<'a> {
    pub(crate) city: &'a str,
    pub(crate) filter: TripFilter,
    pub(crate) rows_loaded: usize,
    pub(crate) rows_analyzed: usize,
    pub(crate) elapsed_ms: Option<f64>,
}

fn section(out: &mut String, title: &str, table: &Table) {
    let _ = writeln!(out, "\n  {title}\n");
    let _ = writeln!(out, "{table}");
}

fn stat_table(headers: &[&str], opts: &TableOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(
        headers
            .iter()
            .map(|h| header_cell(h, opts.use_color))
            .collect::<Vec<_>>(),
    );
    table
}

fn time_table(report: &Report, opts: &TableOptions) -> Table {
    let nf = opts.number_format;
    let t = &report.time;
    let month = Vocabulary::english()
        .month_name(t.common_month.value)
        .map(str::to_string)
        .unwrap_or_else(|| t.common_month.value.to_string());

    let mut table = stat_table(&["Statistic", "Value", "Trips"], opts);
    table.add_row(vec![
        styled_cell("Most common month", None, false),
        styled_cell(&month, None, false),
        right_cell(&format_count(t.common_month.count, nf), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most common day of week", None, false),
        styled_cell(&t.common_weekday.value, None, false),
        right_cell(&format_count(t.common_weekday.count, nf), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most common start hour", None, false),
        styled_cell(&format!("{:02}:00", t.common_hour.value), None, false),
        right_cell(&format_count(t.common_hour.count, nf), None, false),
    ]);
    table
}

fn station_table(report: &Report, opts: &TableOptions) -> Table {
    let nf = opts.number_format;
    let s = &report.station;
    let mut table = stat_table(&["Statistic", "Station", "Trips"], opts);
    table.add_row(vec![
        styled_cell("Most common start station", None, false),
        styled_cell(&s.common_start_station.value, None, false),
        right_cell(&format_count(s.common_start_station.count, nf), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most common end station", None, false),
        styled_cell(&s.common_end_station.value, None, false),
        right_cell(&format_count(s.common_end_station.count, nf), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most common stations combined", None, false),
        styled_cell(&s.common_pair_description, None, false),
        right_cell("", None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most frequent trip", None, false),
        styled_cell(
            &format!(
                "{} → {}",
                s.common_trip.start_station, s.common_trip.end_station
            ),
            None,
            false,
        ),
        right_cell(&format_count(s.common_trip.count, nf), None, false),
    ]);
    table
}

fn duration_table(report: &Report, opts: &TableOptions) -> Table {
    let nf = opts.number_format;
    let d = &report.duration;
    let highlight = if opts.use_color { Some(Color::Green) } else { None };
    let mut table = stat_table(&["Statistic", "Seconds", "Duration"], opts);
    table.add_row(vec![
        styled_cell("Total travel time", None, false),
        right_cell(&format_number(d.total_duration, nf), highlight, true),
        styled_cell(&format_duration(d.total_duration), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Mean travel time", None, false),
        right_cell(&format_decimal(d.mean_duration, nf), highlight, true),
        styled_cell(&format_duration(d.mean_duration.round() as i64), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Shortest trip", None, false),
        right_cell(&format_number(d.shortest, nf), None, false),
        styled_cell(&format_duration(d.shortest), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Longest trip", None, false),
        right_cell(&format_number(d.longest, nf), None, false),
        styled_cell(&format_duration(d.longest), None, false),
    ]);
    table
}

fn counts_table(label: &str, counts: &[CategoryCount], opts: &TableOptions) -> Table {
    let mut table = stat_table(&[label, "Trips"], opts);
    for c in counts {
        table.add_row(vec![
            styled_cell(&c.value, None, false),
            right_cell(&format_count(c.count, opts.number_format), None, false),
        ]);
    }
    table
}

fn birth_year_table(demo: &Demographics, opts: &TableOptions) -> Option<Table> {
    let years = demo.birth_years.as_ref()?;
    let mut table = stat_table(&["Statistic", "Year"], opts);
    table.add_row(vec![
        styled_cell("Earliest year of birth", None, false),
        right_cell(&years.earliest.to_string(), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most recent year of birth", None, false),
        right_cell(&years.latest.to_string(), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Most common year of birth", None, false),
        right_cell(&years.most_common.value.to_string(), None, false),
    ]);
    Some(table)
}

/// Render every statistic group as tables
pub(crate) fn render_report(report: &Report, summary: &ReportSummary<'_>, opts: TableOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n  {} (month: {}, day: {})",
        summary.city, summary.filter.month, summary.filter.day
    );

    section(&mut out, "Most Frequent Times of Travel", &time_table(report, &opts));
    section(&mut out, "Most Popular Stations and Trip", &station_table(report, &opts));
    section(&mut out, "Trip Duration", &duration_table(report, &opts));
    section(
        &mut out,
        "User Types",
        &counts_table("User type", &report.user.user_type_counts, &opts),
    );

    match &report.user.demographics {
        Some(demo) => {
            section(&mut out, "Gender", &counts_table("Gender", &demo.gender_counts, &opts));
            match birth_year_table(demo, &opts) {
                Some(table) => section(&mut out, "Year of Birth", &table),
                None => {
                    let _ = writeln!(out, "\n  No birth year data for the selected trips.");
                }
            }
        }
        None => {
            let _ = writeln!(
                out,
                "\n  Gender and birth year data are not available for {}.",
                summary.city
            );
        }
    }

    let _ = writeln!(out, "{}", summary_line(summary, opts));
    out
}

fn summary_line(summary: &ReportSummary<'_>, opts: TableOptions) -> String {
    let nf = opts.number_format;
    let stats_text = format!(
        "{} trips analyzed ({} loaded)",
        format_count(summary.rows_analyzed, nf),
        format_count(summary.rows_loaded, nf)
    );
    match summary.elapsed_ms {
        Some(ms) if opts.use_color => format!("\n  {stats_text} | \x1b[36m{ms:.0}ms\x1b[0m\n"),
        Some(ms) => format!("\n  {stats_text} | {ms:.0}ms\n"),
        None => format!("\n  {stats_text}\n"),
    }
}

pub(crate) fn print_report(report: &Report, summary: &ReportSummary<'_>, opts: TableOptions) {
    print!("{}", render_report(report, summary, opts));
}
