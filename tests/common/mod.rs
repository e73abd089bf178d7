//! Shared fixtures for integration tests.

#![allow(dead_code)]

use lyric_matcher::corpus::parse_corpus;
use lyric_matcher::highlight::RenderOptions;
use lyric_matcher::index::LyricIndex;

/// Small corpus spanning known albums (out of catalog order) and one unknown album.
pub const CORPUS: &str = r#"[
    {
        "Code": "MID",
        "Title": "Midnights",
        "Year": 2022,
        "Songs": [
            {
                "TrackNumber": 1,
                "Title": "Lantern Song",
                "Lyrics": [
                    { "Order": 1, "SongPart": "Verse 1", "Text": "We danced all night" },
                    { "Order": 2, "SongPart": "Verse 1", "Text": "Lanterns on the water" },
                    { "Order": 3, "SongPart": "Chorus", "Text": "Still dancing, still <here>" }
                ]
            }
        ]
    },
    {
        "Code": "BSD",
        "Title": "Basement Demos",
        "Year": 2004,
        "Songs": [
            {
                "TrackNumber": 1,
                "Title": "Garage",
                "Lyrics": [
                    { "Order": 1, "SongPart": "Intro", "Text": "A dancer & a drummer" }
                ]
            }
        ]
    },
    {
        "Code": "FRL",
        "Title": "Fearless",
        "Year": 2008,
        "Songs": [
            {
                "TrackNumber": 3,
                "Title": "Porch Light",
                "Lyrics": [
                    { "Order": 1, "SongPart": "Verse 1", "Text": "Dance with me on the porch" },
                    { "Order": 2, "SongPart": "Bridge", "Text": "The quiet of the town" }
                ]
            }
        ]
    }
]"#;

pub fn build_index() -> LyricIndex {
    let albums = parse_corpus(CORPUS).expect("fixture corpus parses");
    LyricIndex::from_albums(
        &albums,
        RenderOptions {
            client_url: "https://client.test".to_string(),
        },
    )
}
