use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::prompt::Prompter;
use crate::cli::{Cli, Commands};
use crate::core::{Dataset, TripFilter, Vocabulary, apply};
use crate::error::AppError;
use crate::output::{
    NumberFormat, ReportSummary, TableOptions, output_cities_json, output_raw_json,
    output_report_json, print_report, render_cities_table, render_raw_table, render_report,
};
use crate::source::{Source, all_sources, load, resolve_city};
use crate::stats::compute_report;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) data_dir: PathBuf,
    pub(crate) vocab: Vocabulary,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            use_color: self.cli.use_color(),
            number_format: self.number_format,
        }
    }
}

/// Resolve the city, load its file and apply the month/day filter
fn load_filtered(
    ctx: &CommandContext<'_>,
    city: &str,
) -> Result<(&'static dyn Source, TripFilter, usize, Dataset), AppError> {
    let source = resolve_city(city)?;
    let filter = TripFilter::parse(&ctx.cli.month, &ctx.cli.day, &ctx.vocab)?;
    let dataset = load(source, &ctx.data_dir)?;
    let loaded = dataset.len();
    Ok((source, filter, loaded, filter.apply(&dataset)))
}

fn handle_stats(ctx: &CommandContext<'_>, city: &str) -> Result<(), AppError> {
    let start = Instant::now();
    let (source, filter, rows_loaded, filtered) = load_filtered(ctx, city)?;
    let report = compute_report(&filtered)?;
    let summary = ReportSummary {
        city: source.display_name(),
        filter,
        rows_loaded,
        rows_analyzed: filtered.len(),
        elapsed_ms: Some(start.elapsed().as_secs_f64() * 1000.0),
    };

    if ctx.cli.json {
        println!("{}", output_report_json(&report, &summary));
    } else {
        print_report(&report, &summary, ctx.table_options());
    }
    Ok(())
}

fn handle_raw(
    ctx: &CommandContext<'_>,
    city: &str,
    offset: usize,
    limit: Option<usize>,
) -> Result<(), AppError> {
    let dataset = load(resolve_city(city)?, &ctx.data_dir)?;
    let filtered = apply(&dataset, &ctx.cli.month, &ctx.cli.day, &ctx.vocab)?;
    let limit = limit.unwrap_or_else(|| ctx.cli.page_size());

    if ctx.cli.json {
        println!("{}", output_raw_json(&filtered, offset, limit));
    } else if offset >= filtered.len() {
        println!(
            "No trips past row {offset} ({} rows after filtering).",
            filtered.len()
        );
    } else {
        print!(
            "{}",
            render_raw_table(
                &filtered,
                offset,
                limit,
                ctx.cli.use_color(),
                ctx.number_format
            )
        );
    }
    Ok(())
}

fn handle_cities(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_cities_json(all_sources()));
    } else {
        print!("{}", render_cities_table(all_sources(), ctx.cli.use_color()));
    }
}

/// Prompt loop: choose, report, page raw rows, optionally restart
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    ctx: &CommandContext<'_>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let opts = ctx.table_options();
    let page_size = ctx.cli.page_size();
    prompter.say("Hello! Let's explore some US bikeshare data!")?;

    loop {
        let Some(selection) = prompter.ask_selection(&ctx.vocab)? else {
            return Ok(());
        };
        let start = Instant::now();
        let dataset = load(selection.source, &ctx.data_dir)?;
        let filtered = selection.filter.apply(&dataset);

        match compute_report(&filtered) {
            Ok(report) => {
                let summary = ReportSummary {
                    city: selection.source.display_name(),
                    filter: selection.filter,
                    rows_loaded: dataset.len(),
                    rows_analyzed: filtered.len(),
                    elapsed_ms: Some(start.elapsed().as_secs_f64() * 1000.0),
                };
                prompter.write_raw(&render_report(&report, &summary, opts))?;
            }
            Err(AppError::EmptyDataset) => prompter.say(&AppError::EmptyDataset.to_string())?,
            Err(e) => return Err(e),
        }

        // Pages the filtered trips, same as `raw`; choose "All"/"All" for every row
        let mut offset = 0;
        while prompter.confirm("Would you like to view individual trip data? Type 'yes' or 'no'.")?
            == Some(true)
        {
            if offset >= filtered.len() {
                prompter.say("No more trips to show.")?;
                break;
            }
            prompter.write_raw(&render_raw_table(
                &filtered,
                offset,
                page_size,
                opts.use_color,
                opts.number_format,
            ))?;
            offset += page_size;
        }

        if !prompter.ask_restart()? {
            return Ok(());
        }
    }
}

pub(crate) fn run(cli: &Cli, command: Commands, number_format: NumberFormat) -> Result<(), AppError> {
    let ctx = CommandContext {
        cli,
        data_dir: cli.data_dir(),
        vocab: Vocabulary::english(),
        number_format,
    };
    let city = cli.city.as_deref().unwrap_or_default();

    match command {
        Commands::Stats => handle_stats(&ctx, city),
        Commands::Raw { offset, limit } => handle_raw(&ctx, city, offset, limit),
        Commands::Cities => {
            handle_cities(&ctx);
            Ok(())
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            run_interactive(&ctx, &mut prompter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
2,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
3,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
4,2017-06-05 17:50:00,2017-06-05 18:00:00,600,Wood St & Hubbard St,Damen Ave & Chicago Ave,Customer,,
";

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();
        dir
    }

    fn session(dir: &TempDir, script: &str) -> String {
        let cli = Cli::try_parse_from(["bikestats", "interactive", "--color", "never"]).unwrap();
        let ctx = CommandContext {
            cli: &cli,
            data_dir: dir.path().to_path_buf(),
            vocab: Vocabulary::english(),
            number_format: NumberFormat::default(),
        };
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_interactive(&ctx, &mut prompter).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn interactive_reports_and_pages() {
        let dir = setup();
        let out = session(&dir, "chicago\njune\nall\nyes\nyes\nno\nno\n");

        assert!(out.contains("Hello! Let's explore some US bikeshare data!"));
        assert!(out.contains("Chicago (month: June, day: all)"));
        assert!(out.contains("Wood St & Hubbard St"));
        assert!(out.contains("Rows 0-2 of 2"));
        assert!(out.contains("No more trips to show."));
        assert!(out.contains("Would you like to restart?"));
    }

    #[test]
    fn interactive_restart_runs_again() {
        let dir = setup();
        let out = session(&dir, "chicago\nall\nall\nno\nyes\nchicago\njanuary\nwednesday\nno\nno\n");
        assert!(out.contains("Chicago (month: all, day: all)"));
        assert!(out.contains("Chicago (month: January, day: Wednesday)"));
    }

    #[test]
    fn interactive_empty_selection_is_reported() {
        let dir = setup();
        let out = session(&dir, "chicago\nmarch\nall\nno\nno\n");
        assert!(out.contains("No trips match the selected filters"));
    }

    #[test]
    fn load_filtered_counts_before_and_after() {
        let dir = setup();
        let cli = Cli::try_parse_from(["bikestats", "-c", "chicago", "-m", "june"]).unwrap();
        let ctx = CommandContext {
            cli: &cli,
            data_dir: dir.path().to_path_buf(),
            vocab: Vocabulary::english(),
            number_format: NumberFormat::default(),
        };
        let (source, _, loaded, filtered) = load_filtered(&ctx, "chicago").unwrap();
        assert_eq!(source.name(), "chicago");
        assert_eq!(loaded, 4);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn invalid_filter_fails_before_loading() {
        let cli = Cli::try_parse_from(["bikestats", "-c", "chicago", "-d", "funday"]).unwrap();
        let ctx = CommandContext {
            cli: &cli,
            data_dir: PathBuf::from("/nonexistent"),
            vocab: Vocabulary::english(),
            number_format: NumberFormat::default(),
        };
        assert!(matches!(
            load_filtered(&ctx, "chicago"),
            Err(AppError::InvalidFilter { kind: "day", .. })
        ));
    }
}
