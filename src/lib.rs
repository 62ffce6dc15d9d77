pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod scanner;
pub mod solvers;
pub mod sweep;

pub use error::{Result, SolverError};
pub use report::{OutputFormat, SolverReport};
