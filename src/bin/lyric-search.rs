//! Run one lyric search from the command line.
//! Usage: cargo run --release --bin lyric-search -- <corpus> <query> [--json]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use lyric_matcher::highlight::RenderOptions;
use lyric_matcher::index::{LyricIndex, StemPattern};
use lyric_matcher::normalize::strip_punctuation;
use lyric_matcher::progress::{format_duration, indexing_spinner};
use lyric_matcher::stemmer::stem;

#[derive(Parser)]
#[command(name = "lyric-search")]
#[command(about = "Search a lyric corpus for lines that stem to a word")]
struct Args {
    corpus: PathBuf,

    query: String,

    /// Print the JSON payload the HTTP endpoint would return
    #[arg(long)]
    json: bool,

    /// Hide the spinner, write plain log lines instead
    #[arg(long)]
    log_only: bool,

    #[arg(long, env = "CLIENT_URL", default_value = "")]
    client_url: String,
}

/// Line text with matched words in brackets.
fn bracket_matches(text: &str, pattern: &StemPattern) -> String {
    text.split_whitespace()
        .map(|token| {
            if pattern.matches_token(&stem(&strip_punctuation(token))) {
                format!("[{}]", token)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();
    let spinner = indexing_spinner("Indexing corpus", args.log_only);
    let index = LyricIndex::load(
        &args.corpus,
        RenderOptions {
            client_url: args.client_url.clone(),
        },
    )
    .context("Failed to build lyric index")?;
    let summary = format!(
        "Indexed {} lines from {} albums in {}",
        index.len(),
        index.album_count(),
        format_duration(start.elapsed())
    );
    if args.log_only {
        eprintln!("{}", summary);
    }
    spinner.finish_with_message(summary);

    let results = index.search(&args.query)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let Some(pattern) = LyricIndex::pattern_for(&args.query)? else {
        println!("No query provided.");
        return Ok(());
    };

    println!("\nResults for '{}' (stem '{}'):", args.query, pattern.stem());
    println!("{:-<80}", "");

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    for (album, group) in &results {
        println!("{}", album);
        for track in &group.tracks {
            println!("  {} ({})", track.track_title, track.album_year);
            for line in &track.text {
                println!("    {}", bracket_matches(line, &pattern));
            }
        }
    }

    let line_count: usize = results
        .iter()
        .flat_map(|(_, group)| group.tracks.iter())
        .map(|track| track.text.len())
        .sum();
    println!("{:-<80}", "");
    println!("{} lines in {} albums", line_count, results.len());

    Ok(())
}
