use regex::Regex;
use tracing::{debug, trace};

use super::parse_number;
use crate::error::{Result, SolverError};
use crate::report::SolverReport;

pub const DEFAULT_MAX_STEP: u64 = 3;

/// One line of levels from the day 2 input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub line: usize,
    pub levels: Vec<u64>,
}

/// Read one report per non-blank line.
pub fn parse_reports(text: &str) -> Result<Vec<Report>> {
    let number = Regex::new(r"[0-9]+").expect("valid number pattern");
    let mut reports = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let levels = number
            .find_iter(line)
            .map(|m| parse_number(m.as_str(), line_no))
            .collect::<Result<Vec<_>>>()?;

        reports.push(Report {
            line: line_no + 1,
            levels,
        });
    }

    Ok(reports)
}

fn is_pair_safe(a: u64, b: u64, increasing: bool, max_step: u64) -> bool {
    let diff = a.abs_diff(b);
    if diff < 1 || diff > max_step {
        return false;
    }
    (b > a) == increasing
}

fn levels_safe(levels: &[u64], max_step: u64) -> bool {
    if levels.len() < 2 {
        return false;
    }
    let increasing = levels[1] > levels[0];
    levels
        .windows(2)
        .all(|w| is_pair_safe(w[0], w[1], increasing, max_step))
}

impl Report {
    /// Every step moves `1..=max_step` in one direction.
    pub fn is_safe(&self, max_step: u64) -> Result<bool> {
        if self.levels.len() < 2 {
            return Err(SolverError::ReportTooShort {
                line: self.line,
                levels: self.levels.len(),
            });
        }
        Ok(levels_safe(&self.levels, max_step))
    }

    /// Safe as-is, or safe after dropping exactly one level.
    pub fn is_safe_dampened(&self, max_step: u64) -> Result<bool> {
        if self.is_safe(max_step)? {
            return Ok(true);
        }

        let mut without = Vec::with_capacity(self.levels.len() - 1);
        for skip in 0..self.levels.len() {
            without.clear();
            without.extend(
                self.levels
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, v)| *v),
            );
            if levels_safe(&without, max_step) {
                trace!(line = self.line, removed = skip, "report made safe by removal");
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Number of safe reports, optionally allowing one removed level each.
pub fn count_safe(reports: &[Report], max_step: u64, dampened: bool) -> Result<usize> {
    let mut safe = 0;
    for report in reports {
        let ok = if dampened {
            report.is_safe_dampened(max_step)?
        } else {
            report.is_safe(max_step)?
        };
        if ok {
            safe += 1;
        }
    }
    debug!(safe, total = reports.len(), dampened, "counted safe reports");
    Ok(safe)
}

pub fn report(text: &str, max_step: u64) -> Result<SolverReport> {
    let reports = parse_reports(text)?;
    let safe = count_safe(&reports, max_step, false)?;
    let dampened = count_safe(&reports, max_step, true)?;

    Ok(SolverReport::new(2)
        .answer("Safe reports", safe as u64)
        .answer("Safe reports with margin", dampened as u64))
}
