//! Corpus loading.
//!
//! Reads the album → song → lyric document and flattens it into one
//! [`LyricLine`] per lyric entry, in source order, with the normalized text
//! precomputed. Any read or parse failure is returned to the caller; there is
//! no partial corpus.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;

use crate::models::{AlbumRecord, LyricLine};
use crate::normalize::normalize_text;

/// Read and parse the corpus document at `path`.
pub fn read_corpus(path: &Path) -> Result<Vec<AlbumRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    parse_corpus(&raw).with_context(|| format!("Failed to parse corpus file {}", path.display()))
}

/// Parse a corpus document from its JSON text.
pub fn parse_corpus(json: &str) -> Result<Vec<AlbumRecord>> {
    let albums: Vec<AlbumRecord> =
        serde_json::from_str(json).context("Corpus is not a valid album list")?;
    Ok(albums)
}

/// Flatten albums into searchable lines.
/// Normalization runs in parallel; the output keeps source order.
pub fn flatten_corpus(albums: &[AlbumRecord]) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = albums
        .iter()
        .flat_map(|album| {
            album.songs.iter().flat_map(move |song| {
                song.lyrics.iter().map(move |lyric| LyricLine {
                    album_code: album.code.clone(),
                    album_title: album.title.clone(),
                    album_year: album.year,
                    track_number: song.track_number,
                    track_title: song.title.clone(),
                    order: lyric.order,
                    song_part: lyric.song_part.clone(),
                    text: lyric.text.clone(),
                    normalized_text: String::new(),
                })
            })
        })
        .collect();

    lines
        .par_iter_mut()
        .for_each(|line| line.normalized_text = normalize_text(&line.text));

    lines
}

// ============================================================================
// TESTS
// ============================================================================
