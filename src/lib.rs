//! # specter-embed
//!
//! Batch client for the [SPECTER](https://github.com/allenai/specter) paper
//! embedding API hosted by Semantic Scholar.
//!
//! ## Architecture
//!
//! - **Fixed-size batching**: input records are split in order into batches
//!   of at most 16 and sent one request per batch, sequentially
//! - **Fail-fast aggregation**: per-paper predictions merge into one map;
//!   the first failed batch aborts the call with no partial result
//! - **Query embedding**: a free-text query is embedded by submitting it as
//!   a reserved `QUERY` record
//!
//! The companion binary reads a JSON array of paper records from stdin and
//! writes the resulting map to `query_embedding.json`.

pub mod config;
pub mod embedder;
pub mod errors;
pub mod io;
pub mod paper;

pub use config::SpecterConfig;
pub use embedder::specter::SpecterEmbedder;
pub use embedder::{EmbedderClient, Embedding, EmbeddingMap};
pub use errors::{EmbedError, Result};
pub use paper::PaperRecord;
