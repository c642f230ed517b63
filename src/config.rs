use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::models::DateWindow;

/// Everything one run needs, collected up front so nothing downstream
/// touches stdin.
#[derive(Debug)]
pub struct RunConfig {
    pub companies: Vec<String>,
    pub token: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RunConfig {
    pub fn from_prompts() -> Result<RunConfig> {
        let companies = split_slugs(&prompt(
            "Enter G2 company slugs separated by comma (e.g., jira, notion): ",
        )?);
        let token = prompt("Enter your Wextractor auth token: ")?;
        let start = parse_date(&prompt("Enter start date (YYYY-MM-DD): ")?)
            .context("invalid start date")?;
        let end =
            parse_date(&prompt("Enter end date (YYYY-MM-DD): ")?).context("invalid end date")?;

        Ok(RunConfig {
            companies,
            token,
            start,
            end,
        })
    }
}

/// Checks the requested range against `today`: a future start or an inverted
/// range aborts the run, a future end is clamped to today.
pub fn resolve_window(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<DateWindow> {
    if start > today {
        bail!("Start date cannot be in the future.");
    }
    let end = if end > today {
        println!("⚠ End date is in the future. Adjusting to today.");
        today
    } else {
        end
    };
    if start > end {
        bail!("Start date must be before end date.");
    }
    Ok(DateWindow { start, end })
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
}

fn split_slugs(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(String::from)
        .collect()
}
