mod extractor;
mod types;

pub use extractor::{TokenExtractor, DISABLE_MARKER, ENABLE_MARKER};
pub use types::{Extraction, InstructionOccurrence, Marker, MarkerKind};
