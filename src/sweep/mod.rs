mod engine;
mod filter;
mod intervals;

pub use engine::compute_disabled_intervals;
pub use filter::{partition_instructions, sum_products, Partition};
pub use intervals::{DisabledInterval, DisabledIntervals};
