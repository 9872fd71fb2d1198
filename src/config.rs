use crate::error::ExtractError;
use crate::extract::ExtractMode;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for tile link extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Class that marks a tile element
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Attribute read from each tile's first element child
    #[serde(default = "default_link_attribute")]
    pub link_attribute: String,

    /// Whether a malformed tile aborts the run or is skipped
    #[serde(default)]
    pub mode: ExtractMode,

    /// Base URL that relative links are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// URL for the WebDriver instance used by live capture
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

/// Default tile marker class
fn default_marker() -> String {
    "grid-card-image-container".to_string()
}

/// Default link attribute
fn default_link_attribute() -> String {
    "href".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            link_attribute: default_link_attribute(),
            mode: ExtractMode::default(),
            base_url: None,
            webdriver_url: default_webdriver_url(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if set
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }

    /// Reject values that can never select or read anything
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.marker.trim().is_empty() {
            return Err(ExtractError::Config("marker must not be empty".to_string()));
        }
        if self.marker.contains(char::is_whitespace) {
            return Err(ExtractError::Config(format!(
                "marker {:?} must be a single class name",
                self.marker
            )));
        }
        if self.link_attribute.trim().is_empty() {
            return Err(ExtractError::Config("link_attribute must not be empty".to_string()));
        }
        Ok(())
    }
}
