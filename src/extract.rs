//! Image-URL extraction from a results page.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Quoted absolute URLs under the Getty "enlarge image" path.
static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(http://www\.getty\.edu/art/collections/images/enlarge/[^"]+)""#)
        .expect("valid regex")
});

/// Returns the distinct image URLs found in `page`.
///
/// Duplicates within a page collapse; no cross-page state. An empty set is
/// the pagination termination signal, not an error.
pub fn extract_image_urls(page: &str) -> BTreeSet<String> {
    IMAGE_URL_RE
        .captures_iter(page)
        .map(|cap| cap[1].to_string())
        .collect()
}
