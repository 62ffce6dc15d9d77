use std::collections::HashMap;

use regex::Regex;
use tracing::warn;

use super::parse_number;
use crate::error::{Result, SolverError};
use crate::report::SolverReport;

/// The two location-id columns of the day 1 input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<u64>,
    pub right: Vec<u64>,
}

/// Read `left   right` pairs, one per line. Lines without a pair are skipped.
pub fn parse_lists(text: &str) -> Result<LocationLists> {
    let pair = Regex::new(r"(?P<first>[0-9]+)\s+(?P<second>[0-9]+)").expect("valid pair pattern");
    let mut lists = LocationLists::default();

    for (line_no, line) in text.lines().enumerate() {
        let Some(caps) = pair.captures(line) else {
            if !line.trim().is_empty() {
                warn!(line = line_no + 1, "skipping line without a number pair");
            }
            continue;
        };
        lists.left.push(parse_number(&caps["first"], line_no)?);
        lists.right.push(parse_number(&caps["second"], line_no)?);
    }

    Ok(lists)
}

/// Sum of pairwise distances after sorting both lists.
pub fn total_distance(left: &[u64], right: &[u64]) -> Result<u64> {
    if left.len() != right.len() {
        return Err(SolverError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter()
        .zip(&right)
        .try_fold(0u64, |acc, (a, b)| acc.checked_add(a.abs_diff(*b)))
        .ok_or(SolverError::Overflow { what: "distance" })
}

/// Each left value weighted by how often it appears on the right.
pub fn similarity_score(left: &[u64], right: &[u64]) -> Result<u64> {
    let mut frequencies: HashMap<u64, u64> = HashMap::new();
    for &value in right {
        *frequencies.entry(value).or_default() += 1;
    }

    left.iter()
        .try_fold(0u64, |acc, value| {
            let weight = frequencies.get(value).copied().unwrap_or(0);
            value.checked_mul(weight).and_then(|w| acc.checked_add(w))
        })
        .ok_or(SolverError::Overflow { what: "similarity" })
}

pub fn report(text: &str) -> Result<SolverReport> {
    let lists = parse_lists(text)?;
    let distance = total_distance(&lists.left, &lists.right)?;
    let similarity = similarity_score(&lists.left, &lists.right)?;

    Ok(SolverReport::new(1)
        .answer("Distance", distance)
        .answer("Similarity", similarity))
}
