pub mod day1;
pub mod day2;
pub mod day3;

use tracing::info;

use crate::config::AppConfig;
use crate::error::{Result, SolverError};
use crate::report::SolverReport;

pub use day3::Day3Answer;

/// The puzzles this crate can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    One,
    Two,
    Three,
}

impl Day {
    pub fn number(self) -> u8 {
        match self {
            Day::One => 1,
            Day::Two => 2,
            Day::Three => 3,
        }
    }

    /// Run this day's solver over an input already held in memory.
    pub fn solve(self, text: &str, config: &AppConfig) -> Result<SolverReport> {
        info!(day = self.number(), bytes = text.len(), "solving");
        let report = match self {
            Day::One => day1::report(text)?,
            Day::Two => day2::report(text, config.day2.max_step)?,
            Day::Three => day3::report(text)?,
        };
        info!(day = self.number(), answers = report.answers.len(), "solved");
        Ok(report)
    }
}

/// Parse a decimal run found on `line_no` (zero-based).
pub(crate) fn parse_number(text: &str, line_no: usize) -> Result<u64> {
    text.parse().map_err(|source| SolverError::InvalidNumber {
        line: line_no + 1,
        text: text.to_string(),
        source,
    })
}
