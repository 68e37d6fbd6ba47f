//! Embedder client abstraction.
//!
//! Provides a trait for turning paper records into vector embeddings via a
//! remote service, keyed by paper identifier.
//!
//! The one shipped implementation is [`specter::SpecterEmbedder`].

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::paper::PaperRecord;

pub mod specter;

/// A vector embedding (f32 components).
pub type Embedding = Vec<f32>;

/// Aggregated result: paper identifier to its embedding. Sorted keys so
/// serialized output is deterministic.
pub type EmbeddingMap = BTreeMap<String, Embedding>;

/// Trait for paper-to-vector embedding clients.
#[allow(async_fn_in_trait)]
pub trait EmbedderClient: Send + Sync {
    /// Generate embeddings for a sequence of paper records, returning one
    /// map entry per successfully embedded record.
    async fn embed(&self, papers: &[PaperRecord]) -> Result<EmbeddingMap>;

    /// Generate an embedding for a single free-text query.
    async fn embed_query(&self, query: &str) -> Result<Embedding>;
}
