//! Result grouping: matched lines → album buckets → track groups.

use rustc_hash::FxHashMap;

use crate::catalog::{album_class, album_rank};
use crate::models::{AlbumGroup, MatchResult, SearchResults, TrackGroup};

/// Album bucket under construction, with a lookup from (track title, year)
/// to the track group's position.
struct AlbumBucket<'a> {
    title: &'a str,
    tracks: Vec<TrackGroup>,
    track_index: FxHashMap<(&'a str, u32), usize>,
}

/// Group matches by album and by (album, track, year).
///
/// - Lines inside a track group keep the order of `matches` (corpus order).
/// - Track groups inside an album are ordered by (track title, year).
/// - Albums follow the canonical catalog order; unknown albums go last in
///   the order they were first seen.
pub fn group_matches(matches: Vec<MatchResult<'_>>) -> SearchResults {
    let mut buckets: Vec<AlbumBucket<'_>> = Vec::new();
    let mut bucket_index: FxHashMap<&str, usize> = FxHashMap::default();

    for MatchResult {
        line,
        highlighted_text,
    } in matches
    {
        let album = line.album_title.as_str();
        let b = *bucket_index.entry(album).or_insert_with(|| {
            buckets.push(AlbumBucket {
                title: album,
                tracks: Vec::new(),
                track_index: FxHashMap::default(),
            });
            buckets.len() - 1
        });
        let bucket = &mut buckets[b];

        let key = (line.track_title.as_str(), line.album_year);
        let t = match bucket.track_index.get(&key) {
            Some(&t) => t,
            None => {
                bucket.tracks.push(TrackGroup {
                    album_title: line.album_title.clone(),
                    track_title: line.track_title.clone(),
                    album_year: line.album_year,
                    text: Vec::new(),
                    highlighted_text: Vec::new(),
                    album_class: album_class(album).to_string(),
                    lyrics: String::new(),
                });
                bucket.track_index.insert(key, bucket.tracks.len() - 1);
                bucket.tracks.len() - 1
            }
        };

        let track = &mut bucket.tracks[t];
        track.text.push(line.text.clone());
        track.highlighted_text.push(highlighted_text);
    }

    // Stable: unknown albums share one rank and keep encounter order
    buckets.sort_by_key(|bucket| album_rank(bucket.title));

    buckets
        .into_iter()
        .map(|bucket| {
            let mut tracks = bucket.tracks;
            tracks.sort_by(|a, b| {
                a.track_title
                    .cmp(&b.track_title)
                    .then_with(|| a.album_year.cmp(&b.album_year))
            });
            for track in &mut tracks {
                track.lyrics = track.text.join(" ");
            }
            (
                bucket.title.to_string(),
                AlbumGroup {
                    class: album_class(bucket.title).to_string(),
                    tracks,
                },
            )
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
