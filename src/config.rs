//! Batcher configuration.
//!
//! The endpoint URL and maximum batch size are explicit values handed to the
//! client at construction time, with the production constants as defaults.
//! The binary never reads flags or environment variables; tests point the
//! endpoint at a mock server instead.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{EmbedError, Result};

/// Production SPECTER `invoke` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://model-apis.semanticscholar.org/specter/v1/invoke";

/// Maximum number of paper records per request accepted by the endpoint.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 16;

/// Configuration for [`crate::SpecterEmbedder`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SpecterConfig {
    /// Embedding endpoint URL.
    #[validate(length(min = 1))]
    pub endpoint: String,

    /// Maximum batch size per request (must be > 0).
    #[validate(range(min = 1))]
    pub max_batch_size: usize,
}

impl Default for SpecterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl SpecterConfig {
    /// Check the configuration, mapping failures to [`EmbedError::Validation`].
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate()
            .map_err(|e| EmbedError::Validation(e.to_string()))
    }
}
