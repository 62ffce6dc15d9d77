use super::intervals::DisabledIntervals;
use crate::scanner::InstructionOccurrence;

/// Instructions split by whether their start offset is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub active: Vec<InstructionOccurrence>,
    pub masked: Vec<InstructionOccurrence>,
}

impl Partition {
    /// Sum of products over every instruction, masked or not.
    pub fn unconditional_sum(&self) -> u64 {
        sum_products(&self.active) + sum_products(&self.masked)
    }

    /// Sum of products over active instructions only.
    pub fn active_sum(&self) -> u64 {
        sum_products(&self.active)
    }
}

pub fn partition_instructions(
    instructions: &[InstructionOccurrence],
    disabled: &DisabledIntervals,
) -> Partition {
    let (masked, active) = instructions
        .iter()
        .partition(|ins| disabled.contains(ins.position));
    Partition { active, masked }
}

pub fn sum_products(instructions: &[InstructionOccurrence]) -> u64 {
    instructions.iter().map(InstructionOccurrence::product).sum()
}
