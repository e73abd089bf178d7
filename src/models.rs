//! Core data models for the lyric matcher.
//!
//! This module contains the source document records, the flattened
//! searchable line, and the per-query result shapes that are serialized
//! back to the front end.

use serde::{Deserialize, Serialize};

// ============================================================================
// Source Document Models
// ============================================================================

/// Album entry in the corpus document.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlbumRecord {
    pub code: String,
    pub title: String,
    pub year: u32,
    pub songs: Vec<SongRecord>,
}

/// Song entry within an album.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SongRecord {
    pub track_number: u32,
    pub title: String,
    pub lyrics: Vec<LyricRecord>,
}

/// One lyric line entry within a song.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LyricRecord {
    pub order: u32,
    pub song_part: String,
    pub text: String,
}

// ============================================================================
// Index Models
// ============================================================================

/// One searchable line with its album and song context denormalized onto it.
/// `normalized_text` is computed once from `text` when the corpus is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LyricLine {
    pub album_code: String,
    pub album_title: String,
    pub album_year: u32,
    pub track_number: u32,
    pub track_title: String,
    pub order: u32,
    pub song_part: String,
    pub text: String,
    pub normalized_text: String,
}

/// A matched line plus its rendered markup. Built per query, never stored.
#[derive(Clone, Debug)]
pub struct MatchResult<'a> {
    pub line: &'a LyricLine,
    pub highlighted_text: String,
}

// ============================================================================
// Response Models
// ============================================================================

/// All matched lines of one (album, track, year), in corpus order.
/// Field names are the ones the front end reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackGroup {
    pub album_title: String,
    pub track_title: String,
    pub album_year: u32,
    pub text: Vec<String>,
    pub highlighted_text: Vec<String>,
    pub album_class: String,
    pub lyrics: String,
}

/// Per-album bucket of track groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlbumGroup {
    pub class: String,
    pub tracks: Vec<TrackGroup>,
}

/// Final payload: (album title, bucket) pairs in canonical album order.
/// Serializes as a JSON array of two-element arrays.
pub type SearchResults = Vec<(String, AlbumGroup)>;

// ============================================================================
// TESTS
// ============================================================================
