use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while extracting tile links
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A tile did not yield a link
    #[error(transparent)]
    MissingAnchor(#[from] MissingAnchorError),

    /// An extracted value could not be resolved against the base URL
    #[error("Invalid URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing results or parsing a config file failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Talking to the WebDriver server failed
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A selected tile whose first element child exposes no link
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("tile #{tile_index} has no link: {reason}")]
pub struct MissingAnchorError {
    /// Position of the tile among all selected tiles (document order)
    pub tile_index: usize,
    pub reason: MissingAnchorReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingAnchorReason {
    /// The tile has no element children at all
    NoElementChild,
    /// The first element child lacks the link attribute
    NoLinkAttribute { tag: String, attribute: String },
}

impl fmt::Display for MissingAnchorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingAnchorReason::NoElementChild => write!(f, "no element child"),
            MissingAnchorReason::NoLinkAttribute { tag, attribute } => {
                write!(f, "first element child <{}> has no {:?} attribute", tag, attribute)
            }
        }
    }
}
