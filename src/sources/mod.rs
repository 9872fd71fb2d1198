//! Ways of getting hold of a fully loaded listing page.
//!
//! Pagination is always expanded by a person before the page is handed to
//! the extractor; these sources only read the result.

pub mod file;
pub mod live;
