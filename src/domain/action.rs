use serde::{Deserialize, Serialize};

/// A browser the user can direct a search at.
///
/// Detection order is fixed: chrome, then edge, then firefox. When a
/// phrase mentions more than one browser, the first in this order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
}

impl Browser {
    /// All browsers in detection order.
    pub const ALL: [Browser; 3] = [Browser::Chrome, Browser::Edge, Browser::Firefox];

    /// The spoken name of the browser, as it appears in commands.
    pub fn keyword(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
        }
    }

    /// Detect the first browser mentioned in a phrase (substring match).
    pub fn detect(phrase: &str) -> Option<Browser> {
        Browser::ALL
            .into_iter()
            .find(|b| phrase.contains(b.keyword()))
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// The typed result of interpreting one utterance.
///
/// This is the engine's sole output: downstream collaborators launch the
/// app, open the URL, or render the listing - the engine itself performs
/// no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Launch a registered application by its (lowercase) registry name.
    LaunchApp { name: String },
    /// Open a browser with a search-results URL.
    BrowserSearch {
        browser: Browser,
        query: String,
        /// Fully formed search URL for the query.
        url: String,
    },
    /// List all registered applications.
    ListApps,
    /// Show the available voice commands.
    ShowHelp,
    /// The user asked to stop the session.
    Exit,
    /// Nothing matched; carries the raw utterance for diagnostics.
    Unrecognized { raw: String },
}

/// Result of a fuzzy nearest-neighbor search over registry names.
///
/// Not persisted anywhere; produced and consumed within one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Best candidate, if any name was within the acceptance distance.
    pub candidate: Option<String>,
    /// Edit distance of the candidate (meaningless when `candidate` is None).
    pub distance: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_detection_order() {
        assert_eq!(Browser::detect("search cats in chrome"), Some(Browser::Chrome));
        assert_eq!(Browser::detect("edge please"), Some(Browser::Edge));
        // chrome wins over firefox regardless of position
        assert_eq!(
            Browser::detect("firefox or chrome"),
            Some(Browser::Chrome)
        );
        assert_eq!(Browser::detect("no browser here"), None);
    }
}
