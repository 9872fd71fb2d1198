//! Extracts recipe detail-page URLs from a fully loaded recipe listing page.
//!
//! Every recipe card on the listing carries an image container
//! (`grid-card-image-container`) whose first element child is an anchor
//! pointing at the recipe. The extractor finds those containers, reads the
//! anchor's `href`, drops the query string and hands the ordered list to an
//! [`OutputSink`].

pub mod config;
pub mod error;
pub mod extract;
pub mod results;
pub mod sink;
pub mod sources;
pub mod tree;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ExtractorConfig;
pub use error::{ExtractError, MissingAnchorError, MissingAnchorReason};
pub use extract::{ExtractMode, TileLinkExtractor, first_element_child};
pub use results::Extraction;
pub use sink::{FileSink, LogSink, MemorySink, OutputSink, WriterSink};
pub use tree::{ChildNode, DocumentTree, HtmlTree, MemoryTree, NodeId};

/// Parse `html` and extract its tile links with `config`, logging the result
pub fn extract_from_html(html: &str, config: &ExtractorConfig) -> Result<Extraction, ExtractError> {
    let extractor = TileLinkExtractor::from_config(config)?;
    let tree = HtmlTree::parse_document(html);
    extractor.extract_all(&tree, &mut LogSink)
}
