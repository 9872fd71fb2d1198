use crate::error::ExtractError;
use crate::tree::HtmlTree;
use std::fs;
use std::io::Read;

/// Path value that means "read standard input"
pub const STDIN: &str = "-";

/// Reads a saved listing page from `input`, or from stdin when it is `-`
pub fn read_html(input: &str) -> Result<String, ExtractError> {
    let html = if input == STDIN {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        html
    } else {
        fs::read_to_string(input)?
    };

    ::log::debug!("Read {} bytes of HTML from {}", html.len(), input);
    Ok(html)
}

/// Reads and parses a saved listing page
pub fn load(input: &str) -> Result<HtmlTree, ExtractError> {
    let html = read_html(input)?;
    Ok(HtmlTree::parse_document(&html))
}
