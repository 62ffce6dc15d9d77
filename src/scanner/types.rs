/// Which way a toggle marker flips the scanner state.
///
/// The derived ordering puts `Disable` before `Enable`, which is the
/// tie-break used when two markers share a start offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerKind {
    Disable,
    Enable,
}

/// One occurrence of `do()` or `don't()` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub start: usize,
    /// Offset immediately after the marker text.
    pub end: usize,
    pub kind: MarkerKind,
}

/// One `mul(a,b)` occurrence with its start offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionOccurrence {
    pub position: usize,
    pub operand_a: u32,
    pub operand_b: u32,
}

impl InstructionOccurrence {
    pub fn product(&self) -> u64 {
        u64::from(self.operand_a) * u64::from(self.operand_b)
    }
}

/// Everything the extractor found in one block of text, each sequence in
/// order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub enables: Vec<Marker>,
    pub disables: Vec<Marker>,
    pub instructions: Vec<InstructionOccurrence>,
    /// Total length of the scanned text in bytes.
    pub text_len: usize,
}
