//! Error taxonomy for the scraper.

use crate::catalog::CATEGORIES;
use thiserror::Error;

/// Errors a scrape run can fail with.
///
/// An empty extraction set is NOT represented here: a results page with no
/// image links is the normal pagination termination signal.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Supplied category is not in the fixed allowed set. Raised at
    /// argument-validation time, before any network activity.
    #[error("unknown category {given:?}; allowed values are: {allowed}", allowed = CATEGORIES.join(", "))]
    InvalidCategory { given: String },

    /// libcurl transport failure (connection, timeout, aborted transfer).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// Local file create/write failed (e.g. disk full, permission denied).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
