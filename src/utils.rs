use crate::error::ExtractError;
use url::Url;

/// Drops everything from the first `?` onward
pub fn strip_query(value: &str) -> &str {
    value.split_once('?').map_or(value, |(base, _)| base)
}

/// Resolves a link against an optional base URL.
///
/// Without a base the value is returned unchanged, so relative links stay
/// relative exactly as they appear in the page.
pub fn resolve_link(base: Option<&Url>, value: &str) -> Result<String, ExtractError> {
    match base {
        None => Ok(value.to_string()),
        Some(base) => base
            .join(value)
            .map(String::from)
            .map_err(|source| ExtractError::InvalidUrl {
                value: value.to_string(),
                source,
            }),
    }
}
