//! Browser-search phrase parsing.
//!
//! Extracts `(browser, query)` from a phrase the router has already
//! classified as a browser search ("search for cute cats in chrome",
//! "open edge and search rust lifetimes") and builds the search URL.

use serde::{Deserialize, Serialize};

use crate::domain::Browser;

/// Search-engine URL template the query is embedded into.
const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// A parsed browser-search command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub browser: Browser,
    pub query: String,
    pub url: String,
}

/// Parse a browser-search phrase.
///
/// The caller guarantees the phrase mentions a browser and the word
/// "search". Returns `None` when no query remains after extraction
/// ("no search query specified").
pub fn parse(phrase: &str) -> Option<SearchRequest> {
    // The router only delegates phrases that mention a browser.
    let browser = Browser::detect(phrase)?;

    let mut query = if let Some(index) = phrase.find("search for ") {
        phrase[index + "search for ".len()..].trim().to_string()
    } else if let Some(index) = phrase.find("search ") {
        phrase[index + "search ".len()..].trim().to_string()
    } else {
        String::new()
    };

    // Strip the browser reference wherever it landed in the query:
    // "cats in chrome", "cats on chrome", or a bare "chrome".
    let keyword = browser.keyword();
    query = query
        .replace(&format!("in {keyword}"), "")
        .replace(&format!("on {keyword}"), "")
        .replace(keyword, "")
        .trim()
        .to_string();

    if query.is_empty() {
        return None;
    }

    let url = format!(
        "{SEARCH_URL}{}",
        query.split_whitespace().collect::<Vec<_>>().join("+")
    );

    Some(SearchRequest { browser, query, url })
}
