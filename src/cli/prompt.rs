//! Line-oriented prompts for the interactive session
//!
//! Input and output are injected so the session can run against a terminal
//! or an in-memory script.

use std::io::{BufRead, Write};

use crate::core::{DaySelector, MonthSelector, TripFilter, Vocabulary, title_case};
use crate::error::AppError;
use crate::source::{Source, all_sources, registry::get_source};

/// City and filter picked by the user
pub(crate) struct Selection {
    pub(crate) source: &'static dyn Source,
    pub(crate) filter: TripFilter,
}

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}").map_err(AppError::Terminal)
    }

    pub(crate) fn write_raw(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.output, "{text}").map_err(AppError::Terminal)
    }

    /// Ask a question and read one line; `None` once input is exhausted
    fn ask(&mut self, question: &str) -> Result<Option<String>, AppError> {
        writeln!(self.output, "\n{question}").map_err(AppError::Terminal)?;
        self.output.flush().map_err(AppError::Terminal)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(AppError::Terminal)?;
        if read == 0 {
            self.say("\nNo input taken. Exiting program.")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-ask until `parse` accepts the title-cased answer
    fn choose<T>(
        &mut self,
        question: &str,
        options: &[&str],
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, AppError> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&title_case(&answer)) {
                return Ok(Some(value));
            }
            self.say(&format!(
                "Invalid input. Please choose from {}.",
                options.join(", ")
            ))?;
        }
    }

    pub(crate) fn ask_city(&mut self) -> Result<Option<&'static dyn Source>, AppError> {
        let names: Vec<&str> = all_sources().map(|s| s.display_name()).collect();
        let question = format!("Would you like to see data for {}?", or_list(&names));
        let city = self.choose(&question, &names, get_source)?;
        if let Some(source) = city {
            self.say(&format!(
                "\nLooks like you want to hear about {}!",
                source.display_name()
            ))?;
        }
        Ok(city)
    }

    pub(crate) fn ask_month(&mut self, vocab: &Vocabulary) -> Result<Option<MonthSelector>, AppError> {
        let mut options = vocab.months().to_vec();
        options.push("All");
        let question = format!("Which month would you like to filter by? {}?", or_list(&options));
        self.choose(&question, &options, |answer| MonthSelector::parse(answer, vocab).ok())
    }

    pub(crate) fn ask_day(&mut self, vocab: &Vocabulary) -> Result<Option<DaySelector>, AppError> {
        let mut options = vocab.days().to_vec();
        options.push("All");
        let question = format!("Which day would you like to filter by? {}?", or_list(&options));
        self.choose(&question, &options, |answer| DaySelector::parse(answer, vocab).ok())
    }

    pub(crate) fn ask_selection(&mut self, vocab: &Vocabulary) -> Result<Option<Selection>, AppError> {
        let Some(source) = self.ask_city()? else {
            return Ok(None);
        };
        let Some(month) = self.ask_month(vocab)? else {
            return Ok(None);
        };
        let Some(day) = self.ask_day(vocab)? else {
            return Ok(None);
        };
        self.say(&"-".repeat(40))?;
        Ok(Some(Selection {
            source,
            filter: TripFilter::new(month, day),
        }))
    }

    /// "yes" or "no", asked again on anything else; `None` at end of input
    pub(crate) fn confirm(&mut self, question: &str) -> Result<Option<bool>, AppError> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "yes" => return Ok(Some(true)),
                "no" => return Ok(Some(false)),
                _ => {}
            }
        }
    }

    /// Only an explicit "yes" restarts
    pub(crate) fn ask_restart(&mut self) -> Result<bool, AppError> {
        let answer = self.ask("Would you like to restart? Enter yes or no.")?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

/// "A, B, or C"
fn or_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
