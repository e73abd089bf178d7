use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lyric_matcher::config::ServerArgs;
use lyric_matcher::index::LyricIndex;
use lyric_matcher::progress::format_duration;
use lyric_matcher::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.default_log_level().to_string())),
        )
        .init();

    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("Corpus path: {}", args.corpus.display());

    // A corpus that cannot be loaded stops startup; nothing is served
    let start = Instant::now();
    let index = LyricIndex::load(&args.corpus, args.render_options())
        .context("Failed to build lyric index")?;
    info!(
        "Indexed {} lines from {} albums in {}",
        index.len(),
        index.album_count(),
        format_duration(start.elapsed())
    );

    let app = build_router(AppState::new(index));

    let addr = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Search: http://{}/similar_lyrics?query=<word>", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
