//! Server configuration from command-line flags with environment fallbacks.

use clap::builder::FalseyValueParser;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::highlight::RenderOptions;

pub const DEFAULT_PORT: u16 = 10081;

#[derive(Parser, Debug, Clone)]
#[command(name = "lyric-matcher")]
#[command(about = "Serve stemmed lyric search over a fixed song corpus")]
pub struct ServerArgs {
    /// Corpus document (albums → songs → lyric lines, JSON)
    #[arg(long, env = "LYRICS_CORPUS", default_value = "data/album-song-lyrics.json")]
    pub corpus: PathBuf,

    #[arg(long, env = "BIND_ADDR", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Front-end base URL used in the href of clickable words
    #[arg(long, env = "CLIENT_URL", default_value = "")]
    pub client_url: String,

    /// Log at debug level unless RUST_LOG says otherwise.
    /// Any `DEBUG` value that is not empty or a falsey word (`0`, `false`, `no`, `off`) turns it on.
    #[arg(long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,
}

impl ServerArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            client_url: self.client_url.trim_end_matches('/').to_string(),
        }
    }

    /// Default directive for the tracing filter when RUST_LOG is unset.
    pub fn default_log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
