use crate::config::ExtractorConfig;
use crate::error::{ExtractError, MissingAnchorError, MissingAnchorReason};
use crate::results::Extraction;
use crate::sink::OutputSink;
use crate::tree::DocumentTree;
use crate::utils::{resolve_link, strip_query};
use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
mod tests;

/// How a tile without a readable link is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// The first malformed tile fails the whole run
    #[default]
    Strict,
    /// Malformed tiles are skipped and reported in [`Extraction::skipped`]
    Lenient,
}

/// Returns the first child of `node` that is an element, skipping text,
/// comments and anything else that precedes it
pub fn first_element_child<'a, T: DocumentTree>(tree: &'a T, node: T::Node<'a>) -> Option<T::Node<'a>> {
    tree.child_nodes(node).into_iter().find_map(|child| child.element())
}

/// Extracts recipe links from the image-container tiles of a listing page
#[derive(Debug, Clone)]
pub struct TileLinkExtractor {
    marker: String,
    link_attribute: String,
    mode: ExtractMode,
    base_url: Option<Url>,
}

impl Default for TileLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TileLinkExtractor {
    /// Create an extractor with the default marker, `href` and strict mode
    pub fn new() -> Self {
        let defaults = ExtractorConfig::default();
        Self {
            marker: defaults.marker,
            link_attribute: defaults.link_attribute,
            mode: defaults.mode,
            base_url: None,
        }
    }

    /// Build an extractor from a loaded configuration
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        config.validate()?;
        let base_url = config
            .base_url
            .as_deref()
            .map(|base| {
                Url::parse(base).map_err(|source| ExtractError::InvalidUrl {
                    value: base.to_string(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            marker: config.marker.clone(),
            link_attribute: config.link_attribute.clone(),
            mode: config.mode,
            base_url,
        })
    }

    /// Set the class that marks a tile
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the attribute read from each tile's first element child
    pub fn with_link_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.link_attribute = attribute.into();
        self
    }

    /// Set strict or lenient handling of malformed tiles
    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    /// Resolve every extracted link against `base`
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base_url = Some(base);
        self
    }

    pub fn mode(&self) -> ExtractMode {
        self.mode
    }

    /// All tiles of the document, in document order
    pub fn select_tiles<'a, T: DocumentTree>(&self, tree: &'a T) -> Vec<T::Node<'a>> {
        let tiles = tree.nodes_by_marker(&self.marker);
        if tiles.is_empty() {
            ::log::warn!("No tiles with class {:?} found", self.marker);
        } else {
            ::log::debug!("Found {} tiles with class {:?}", tiles.len(), self.marker);
        }
        tiles
    }

    /// The link of a single tile with its query string removed.
    ///
    /// `tile_index` is the tile's position among the selected tiles and is
    /// only used to identify the tile in errors.
    pub fn extract_url<'a, T: DocumentTree>(
        &self,
        tree: &'a T,
        tile_index: usize,
        tile: T::Node<'a>,
    ) -> Result<String, ExtractError> {
        let missing = |reason| MissingAnchorError { tile_index, reason };

        let child = first_element_child(tree, tile).ok_or_else(|| missing(MissingAnchorReason::NoElementChild))?;
        let value = tree.attribute(child, &self.link_attribute).ok_or_else(|| {
            missing(MissingAnchorReason::NoLinkAttribute {
                tag: tree.tag_name(child).to_string(),
                attribute: self.link_attribute.clone(),
            })
        })?;

        let url = resolve_link(self.base_url.as_ref(), strip_query(value))?;
        ::log::debug!("Tile {}: {}", tile_index, url);
        Ok(url)
    }

    /// Select every tile and extract its link, without emitting anything
    pub fn extract<T: DocumentTree>(&self, tree: &T) -> Result<Extraction, ExtractError> {
        let mut extraction = Extraction::default();

        for (index, tile) in self.select_tiles(tree).into_iter().enumerate() {
            match self.extract_url(tree, index, tile) {
                Ok(url) => extraction.urls.push(url),
                Err(ExtractError::MissingAnchor(err)) if self.mode == ExtractMode::Lenient => {
                    ::log::warn!("Skipping {}", err);
                    extraction.skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(extraction)
    }

    /// Extract every tile's link and hand the sequence to `sink`.
    ///
    /// Nothing is emitted when extraction fails.
    pub fn extract_all<T, S>(&self, tree: &T, sink: &mut S) -> Result<Extraction, ExtractError>
    where
        T: DocumentTree,
        S: OutputSink + ?Sized,
    {
        let extraction = self.extract(tree)?;
        sink.emit(&extraction.urls)?;
        Ok(extraction)
    }
}
