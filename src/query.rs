//! Search-page URL construction.

use crate::catalog::Category;
use url::Url;

/// Getty gateway search endpoint.
const SEARCH_ENDPOINT: &str = "http://search.getty.edu/gateway/search";

/// Builds the results-page URL for one (category, batch size, page) query.
///
/// Query values go through the structured pair builder and are
/// percent-encoded; the category is wrapped in literal quotes the way the
/// endpoint expects. Deterministic, no side effects.
pub fn build_page_query(category: Category, batch_size: u32, page: u32) -> Url {
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("valid endpoint");
    url.query_pairs_mut()
        .append_key_only("q")
        .append_pair("cat", "type")
        .append_pair("dir", "s")
        .append_pair("img", "1")
        .append_pair("types", &format!("\"{}\"", category.as_str()))
        .append_pair("rows", &batch_size.to_string())
        .append_pair("pg", &page.to_string());
    url
}
