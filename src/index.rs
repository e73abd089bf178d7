//! The in-memory lyric index and the stem matcher.
//!
//! The index is a flat list of lines with their normalized text computed at
//! build time. A query is stemmed as one unit and matched as a prefix on a
//! word boundary anywhere inside each line's normalized text. Every query is a
//! full linear scan; the index is never mutated after construction, so one
//! instance can be shared freely between threads.

use anyhow::Result;
use regex::Regex;
use std::path::Path;

use crate::corpus::{flatten_corpus, read_corpus};
use crate::grouping::group_matches;
use crate::highlight::{render_line, RenderOptions};
use crate::models::{AlbumRecord, LyricLine, MatchResult, SearchResults};
use crate::normalize::clean_query;
use crate::stemmer::stem;

// ============================================================================
// Stem Pattern
// ============================================================================

/// Case-insensitive "stem followed by word characters, on word boundaries".
#[derive(Clone, Debug)]
pub struct StemPattern {
    stem: String,
    /// Unanchored, for scanning normalized text
    search: Regex,
    /// Anchored at the start, for testing a single re-stemmed token
    prefix: Regex,
}

impl StemPattern {
    pub fn new(stem: &str) -> Result<Self> {
        let escaped = regex::escape(stem);
        Ok(Self {
            stem: stem.to_string(),
            search: Regex::new(&format!(r"(?i)\b{}\w*\b", escaped))?,
            prefix: Regex::new(&format!(r"(?i)^\b{}\w*\b", escaped))?,
        })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Substring match anywhere in a line's normalized text.
    pub fn matches_normalized(&self, normalized_text: &str) -> bool {
        self.search.is_match(normalized_text)
    }

    /// Match at the start of an already stemmed token.
    pub fn matches_token(&self, stemmed_token: &str) -> bool {
        self.prefix.is_match(stemmed_token)
    }
}

// ============================================================================
// Lyric Index
// ============================================================================

/// Immutable searchable corpus.
pub struct LyricIndex {
    lines: Vec<LyricLine>,
    album_count: usize,
    options: RenderOptions,
}

impl LyricIndex {
    /// Build from parsed album records.
    pub fn from_albums(albums: &[AlbumRecord], options: RenderOptions) -> Self {
        Self {
            lines: flatten_corpus(albums),
            album_count: albums.len(),
            options,
        }
    }

    /// Read the corpus document at `path` and build the index.
    pub fn load(path: &Path, options: RenderOptions) -> Result<Self> {
        let albums = read_corpus(path)?;
        Ok(Self::from_albums(&albums, options))
    }

    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn album_count(&self) -> usize {
        self.album_count
    }

    /// Pattern for a raw query, or None when the query has nothing searchable.
    pub fn pattern_for(query: &str) -> Result<Option<StemPattern>> {
        let Some(cleaned) = clean_query(query) else {
            return Ok(None);
        };
        let stemmed = stem(&cleaned);
        if stemmed.is_empty() {
            return Ok(None);
        }
        StemPattern::new(&stemmed).map(Some)
    }

    /// Matching lines in corpus order, each with its highlighted markup.
    /// An empty or punctuation-only query returns nothing without scanning.
    pub fn find_matches(&self, query: &str) -> Result<Vec<MatchResult<'_>>> {
        let Some(pattern) = Self::pattern_for(query)? else {
            return Ok(Vec::new());
        };
        Ok(self.scan(&pattern))
    }

    fn scan(&self, pattern: &StemPattern) -> Vec<MatchResult<'_>> {
        self.lines
            .iter()
            .filter(|line| pattern.matches_normalized(&line.normalized_text))
            .map(|line| MatchResult {
                line,
                highlighted_text: render_line(
                    &line.text,
                    |token| pattern.matches_token(token),
                    &self.options,
                ),
            })
            .collect()
    }

    /// Full query: match, render, group and order.
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        Ok(group_matches(self.find_matches(query)?))
    }
}

// ============================================================================
// TESTS
// ============================================================================
