use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, SolverError};

/// Read a whole puzzle input into memory.
pub fn read_input(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading input");
    fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })
}
