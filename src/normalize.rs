//! Shared normalization functions for lyric indexing and querying.
//! Used both when the index is built and when a query arrives.
//!
//! CRITICAL: the index and the query path must agree byte for byte. Any change
//! here changes what matches; run the tests after changes.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::stemmer::stem;

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// Everything that is neither an ASCII word character nor whitespace.
/// Matches are deleted, not replaced: "don't" becomes "dont".
pub static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").unwrap());

// ============================================================================
// STOPWORDS
// ============================================================================

/// English stopword list. Entries with apostrophes can never match a stripped
/// token but are kept so the list stays the standard one.
const STOPWORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

pub static STOPWORDS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOPWORD_LIST.iter().copied().collect());

// ============================================================================
// NORMALIZATION FUNCTIONS
// ============================================================================

/// Delete punctuation, keeping word characters and whitespace as they are.
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

/// Case-insensitive stopword check. The caller decides whether punctuation
/// has already been removed.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token.to_lowercase().as_str())
}

/// Normalize a lyric line for matching.
/// Strips punctuation, drops stopwords and stems what is left, joined by single spaces.
/// e.g., "We danced all night!" → "danc night"
pub fn normalize_text(text: &str) -> String {
    strip_punctuation(text)
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(stem)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prepare a raw query string: strip punctuation and outer whitespace.
/// Returns None when nothing searchable remains.
pub fn clean_query(query: &str) -> Option<String> {
    let stripped = strip_punctuation(query);
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
