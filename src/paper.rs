//! PaperRecord — one paper's metadata as submitted to the embedding API.

use serde::{Deserialize, Serialize};

/// A paper record forwarded verbatim to the SPECTER endpoint.
///
/// Only `paper_id` is interpreted by this crate (it keys the result map).
/// `title` and `abstract` are the fields the model reads; anything else an
/// input document carries is kept in `extra` and forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub paper_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PaperRecord {
    /// Build a minimal record with only a `paper_id`.
    pub fn new(paper_id: impl Into<String>) -> Self {
        Self {
            paper_id: paper_id.into(),
            title: None,
            abstract_text: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Build the reserved record used to embed a free-text query:
    /// the query becomes the title, the abstract is left empty.
    pub fn query(text: impl Into<String>) -> Self {
        Self {
            paper_id: crate::embedder::specter::QUERY_PAPER_ID.to_string(),
            title: Some(text.into()),
            abstract_text: Some(String::new()),
            extra: serde_json::Map::new(),
        }
    }
}
