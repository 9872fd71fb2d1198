use clap::Parser;
use std::path::PathBuf;
use tile_links::{ExtractError, ExtractMode, ExtractorConfig};

#[derive(Parser, Debug)]
#[command(name = "tile-links")]
#[command(about = "Extracts recipe URLs from the image-container tiles of a fully loaded listing page")]
#[command(version)]
pub struct Args {
    /// Saved HTML of the fully loaded listing page ("-" or omitted reads stdin)
    pub input: Option<String>,

    /// Open this listing URL through WebDriver and capture it once you have loaded every page
    #[arg(long, value_name = "URL", conflicts_with = "input")]
    pub live: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Class that marks a recipe tile
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Attribute holding the link on the tile's first element child
    #[arg(short, long)]
    pub attribute: Option<String>,

    /// Skip malformed tiles instead of failing the whole run
    #[arg(long)]
    pub lenient: bool,

    /// Resolve extracted links against this URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write the JSON list to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Input path, defaulting to stdin
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or(tile_links::sources::file::STDIN)
    }

    /// Load the config file (if any) and layer command-line overrides on top
    pub fn to_config(&self) -> Result<ExtractorConfig, ExtractError> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };
        config.apply_env();

        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(attribute) = &self.attribute {
            config.link_attribute = attribute.clone();
        }
        if self.lenient {
            config.mode = ExtractMode::Lenient;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
