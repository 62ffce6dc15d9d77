use std::path::PathBuf;

/// Errors raised while reading puzzle input or computing an answer.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The instruction grammar matched but a digit group did not parse.
    #[error("malformed token {text:?} at offset {offset}: {source}")]
    MalformedToken {
        offset: usize,
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid number {text:?} on line {line}: {source}")]
    InvalidNumber {
        line: usize,
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("location lists differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("{what} overflows a 64-bit total")]
    Overflow { what: &'static str },

    #[error("no input for day {day}: pass --file/-f or set inputs.day{day} in the config")]
    MissingInput { day: u8 },

    #[error("report on line {line} has {levels} level(s), need at least 2")]
    ReportTooShort { line: usize, levels: usize },
}

pub type Result<T> = std::result::Result<T, SolverError>;
