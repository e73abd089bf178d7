//! Lyric matcher library - stemmed full-text search over a fixed song corpus.
//!
//! Pipeline: `normalize`/`stemmer` → `index` (match) → `highlight` (render)
//! → `grouping` (assemble). `server` and `config` are the HTTP plumbing around it.

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod grouping;
pub mod highlight;
pub mod index;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod server;
pub mod stemmer;
