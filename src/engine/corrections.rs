//! Correction table for commonly misheard words.
//!
//! Speech engines reliably mangle short command words ("surge" for
//! "search", "crome" for "chrome"). Before classification, the engine
//! rewrites these noisy forms to their canonical tokens with plain
//! literal substring replacement - no regex, no word boundaries.
//!
//! The table is applied in order, each entry globally, each operating on
//! the result of the previous one. It is idempotent by construction: no
//! entry's pattern occurs in any entry's replacement, so a second pass
//! over already-corrected text changes nothing.

use once_cell::sync::Lazy;

/// Ordered (misheard pattern, canonical replacement) pairs.
///
/// Order matters: "spot if i" must be tried before its prefix "spot if".
static CORRECTIONS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        // Command words
        ("oh went", "open"),
        ("oh pen", "open"),
        ("opened", "open"),
        ("opening", "open"),
        // Browser names
        ("crome", "chrome"),
        ("krome", "chrome"),
        ("from", "chrome"),
        // App names
        ("spot if i", "spotify"),
        ("spot if", "spotify"),
        ("spotty", "spotify"),
        ("what's up", "whatsapp"),
        ("watts up", "whatsapp"),
        // Search commands
        ("such", "search"),
        ("surge", "search"),
    ]
});

/// Apply the correction table to a phrase.
///
/// Returns the corrected string; compare with the input to see whether
/// anything changed.
pub fn apply(phrase: &str) -> String {
    let mut corrected = phrase.to_string();
    for (pattern, replacement) in CORRECTIONS.iter() {
        corrected = corrected.replace(pattern, replacement);
    }
    corrected
}
