//! Static album tables: canonical display order and per-album CSS class.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Known albums in canonical order, each with its display class.
pub const ALBUMS: &[(&str, &str)] = &[
    ("Taylor Swift", "taylor-swift"),
    ("Fearless", "fearless"),
    ("Speak Now", "speak-now"),
    ("Red", "red"),
    ("1989", "nineteen-eighty-nine"),
    ("Reputation", "reputation"),
    ("Lover", "lover"),
    ("Folklore", "folklore"),
    ("Evermore", "evermore"),
    ("Midnights", "midnights"),
    ("The Tortured Poets Department", "the-tortured-poets-department"),
];

static ALBUM_CLASSES: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| ALBUMS.iter().copied().collect());

static ALBUM_RANKS: Lazy<FxHashMap<&'static str, usize>> = Lazy::new(|| {
    ALBUMS
        .iter()
        .enumerate()
        .map(|(rank, &(title, _))| (title, rank))
        .collect()
});

/// Display class for an album title; empty for unknown albums.
pub fn album_class(title: &str) -> &'static str {
    ALBUM_CLASSES.get(title).copied().unwrap_or("")
}

/// Sort rank for an album title. Unknown albums share the rank after the last
/// known one, so a stable sort keeps them in encounter order.
pub fn album_rank(title: &str) -> usize {
    ALBUM_RANKS.get(title).copied().unwrap_or(ALBUMS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_class() {
        assert_eq!(album_class("1989"), "nineteen-eighty-nine");
        assert_eq!(album_class("Folklore"), "folklore");
        assert_eq!(album_class("Unknown Bootleg"), "");
        // Titles are matched exactly
        assert_eq!(album_class("folklore"), "");
    }

    #[test]
    fn test_album_rank() {
        assert_eq!(album_rank("Taylor Swift"), 0);
        assert_eq!(album_rank("The Tortured Poets Department"), 10);
        assert_eq!(album_rank("Unknown Bootleg"), ALBUMS.len());
        assert!(album_rank("Red") < album_rank("Midnights"));
    }
}
