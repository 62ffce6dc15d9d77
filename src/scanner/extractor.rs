use regex::{Match, Regex};
use tracing::debug;

use super::types::{Extraction, InstructionOccurrence, Marker, MarkerKind};
use crate::error::{Result, SolverError};

pub const ENABLE_MARKER: &str = "do()";
pub const DISABLE_MARKER: &str = "don't()";

// ASCII-only digit classes keep every match parseable as an integer.
const INSTRUCTION_PATTERN: &str = r"mul\(([0-9]{1,3}),([0-9]{1,3})\)";

/// Owns the compiled patterns for the three token kinds.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    enable: Regex,
    disable: Regex,
    instruction: Regex,
}

impl TokenExtractor {
    pub fn new() -> Self {
        Self {
            enable: Regex::new(&regex::escape(ENABLE_MARKER)).expect("valid enable pattern"),
            disable: Regex::new(&regex::escape(DISABLE_MARKER)).expect("valid disable pattern"),
            instruction: Regex::new(INSTRUCTION_PATTERN).expect("valid instruction pattern"),
        }
    }

    /// Scan `text` for markers and instructions.
    pub fn extract(&self, text: &str) -> Result<Extraction> {
        let enables = find_markers(&self.enable, text, MarkerKind::Enable);
        let disables = find_markers(&self.disable, text, MarkerKind::Disable);
        let instructions = self.find_instructions(text)?;

        debug!(
            enables = enables.len(),
            disables = disables.len(),
            instructions = instructions.len(),
            "extracted tokens"
        );

        Ok(Extraction {
            enables,
            disables,
            instructions,
            text_len: text.len(),
        })
    }

    fn find_instructions(&self, text: &str) -> Result<Vec<InstructionOccurrence>> {
        let mut out = Vec::new();

        for caps in self.instruction.captures_iter(text) {
            let whole = caps.get_match();
            let operand_a = parse_operand(caps.get(1), whole)?;
            let operand_b = parse_operand(caps.get(2), whole)?;

            out.push(InstructionOccurrence {
                position: whole.start(),
                operand_a,
                operand_b,
            });
        }

        Ok(out)
    }
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn find_markers(pattern: &Regex, text: &str, kind: MarkerKind) -> Vec<Marker> {
    pattern
        .find_iter(text)
        .map(|m| Marker {
            start: m.start(),
            end: m.end(),
            kind,
        })
        .collect()
}

// A missing group is reported against the whole instruction.
fn parse_operand(group: Option<Match<'_>>, whole: Match<'_>) -> Result<u32> {
    let m = group.unwrap_or(whole);
    let (offset, text) = (m.start(), m.as_str());
    text.parse().map_err(|source| SolverError::MalformedToken {
        offset,
        text: text.to_string(),
        source,
    })
}
