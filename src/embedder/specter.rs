//! SPECTER embedding client implementation.
//!
//! Talks to the Semantic Scholar SPECTER `invoke` endpoint via [`reqwest`]:
//! the input is split into fixed-size batches, each batch is POSTed as one
//! JSON array, and per-paper predictions are merged into a single map.
//!
//! Dispatch is strictly sequential and fail-fast: the first batch that does
//! not come back with a success status aborts the whole call, and the map
//! accumulated so far is discarded. There is no retry.

use serde::Deserialize;
use tracing::debug;

use crate::config::SpecterConfig;
use crate::embedder::{Embedding, EmbedderClient, EmbeddingMap};
use crate::errors::{EmbedError, Result};
use crate::paper::PaperRecord;

/// Reserved `paper_id` under which a free-text query is submitted.
pub const QUERY_PAPER_ID: &str = "QUERY";

/// One entry of the `preds` array in a successful response.
#[derive(Debug, Deserialize)]
struct Prediction {
    paper_id: String,
    embedding: Embedding,
}

/// Success response body from the `invoke` endpoint.
#[derive(Debug, Deserialize)]
struct InvokeResponse {
    preds: Vec<Prediction>,
}

/// SPECTER embedding client that implements [`EmbedderClient`].
pub struct SpecterEmbedder {
    http: reqwest::Client,
    endpoint: String,
    batch_size: usize,
}

impl SpecterEmbedder {
    /// Create a client with the production endpoint and batch size.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
            batch_size: crate::config::DEFAULT_MAX_BATCH_SIZE,
        }
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`EmbedError::Validation`] for an empty endpoint or a zero
    /// batch size.
    pub fn with_config(config: SpecterConfig) -> Result<Self> {
        config.ensure_valid()?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint,
            batch_size: config.max_batch_size,
        })
    }

    /// POST one batch to the endpoint and parse its predictions.
    async fn invoke_batch(&self, batch: &[PaperRecord]) -> Result<Vec<Prediction>> {
        debug!(batch_len = batch.len(), "sending batch to SPECTER");

        let response = self.http.post(&self.endpoint).json(&batch).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: InvokeResponse = response
            .json()
            .await
            .map_err(|e| EmbedError::MalformedResponse(e.to_string()))?;

        Ok(parsed.preds)
    }
}

impl Default for SpecterEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedderClient for SpecterEmbedder {
    /// Embed every record, one request per batch, batches taken in input
    /// order. An empty input makes no requests and yields an empty map.
    async fn embed(&self, papers: &[PaperRecord]) -> Result<EmbeddingMap> {
        let mut by_paper_id = EmbeddingMap::new();

        // batch_size is validated >= 1 at construction, so chunks() is safe.
        for batch in papers.chunks(self.batch_size) {
            for pred in self.invoke_batch(batch).await? {
                by_paper_id.insert(pred.paper_id, pred.embedding);
            }
        }

        Ok(by_paper_id)
    }

    /// Embed a free-text query by submitting it as the reserved
    /// [`QUERY_PAPER_ID`] record and extracting that key from the result.
    async fn embed_query(&self, query: &str) -> Result<Embedding> {
        let record = PaperRecord::query(query);
        let mut embeddings = self.embed(std::slice::from_ref(&record)).await?;
        embeddings.remove(QUERY_PAPER_ID).ok_or_else(|| {
            EmbedError::MalformedResponse("no embedding returned for query".to_string())
        })
    }
}
