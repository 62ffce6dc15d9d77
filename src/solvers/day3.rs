use tracing::debug;

use crate::error::Result;
use crate::report::SolverReport;
use crate::scanner::TokenExtractor;
use crate::sweep::{compute_disabled_intervals, partition_instructions};

/// Both day 3 sums for one corrupted memory dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day3Answer {
    /// Sum over every `mul` instruction.
    pub unconditional: u64,
    /// Sum over instructions outside `don't()` regions.
    pub masked: u64,
}

pub fn solve(text: &str) -> Result<Day3Answer> {
    let extractor = TokenExtractor::new();
    let found = extractor.extract(text)?;

    let disabled = compute_disabled_intervals(&found.enables, &found.disables, found.text_len);
    let parts = partition_instructions(&found.instructions, &disabled);

    debug!(
        active = parts.active.len(),
        masked = parts.masked.len(),
        intervals = disabled.len(),
        "partitioned instructions"
    );

    Ok(Day3Answer {
        unconditional: parts.unconditional_sum(),
        masked: parts.active_sum(),
    })
}

pub fn report(text: &str) -> Result<SolverReport> {
    let answer = solve(text)?;
    Ok(SolverReport::new(3)
        .answer("Multiplication product sum", answer.unconditional)
        .answer("Multiplication sum with enable/disable", answer.masked))
}
