use crate::error::MissingAnchorError;
use serde::Serialize;

/// Outcome of one extraction pass over a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Extracted URLs, one per well-formed tile, in document order
    pub urls: Vec<String>,

    /// Malformed tiles passed over in lenient mode (always empty in strict mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<MissingAnchorError>,
}

impl Extraction {
    /// Number of tiles that were looked at
    pub fn tiles_seen(&self) -> usize {
        self.urls.len() + self.skipped.len()
    }
}
