//! Input and output boundaries.
//!
//! The input is one JSON document (an array of paper records) read from
//! stdin; the output is the embedding map, pretty-printed to
//! [`OUTPUT_PATH`] in the current working directory. Both sides fail with
//! typed errors before or after the network stage, never during it.

use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::embedder::EmbeddingMap;
use crate::errors::{EmbedError, Result};
use crate::paper::PaperRecord;

/// Output file written after a fully successful run.
pub const OUTPUT_PATH: &str = "query_embedding.json";

/// Parse one JSON document as an array of paper records.
///
/// # Errors
/// Returns [`EmbedError::Input`] if the document is not valid JSON or not an
/// array of objects each carrying a string `paper_id`.
pub fn parse_papers(input: &str) -> Result<Vec<PaperRecord>> {
    serde_json::from_str(input).map_err(|e| EmbedError::Input(e.to_string()))
}

/// Read stdin to EOF and parse it as an array of paper records.
pub async fn read_papers_from_stdin() -> Result<Vec<PaperRecord>> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    parse_papers(&input)
}

/// Serialize the embedding map pretty-printed and write it to `path`.
pub async fn write_embeddings(path: &Path, embeddings: &EmbeddingMap) -> Result<()> {
    let json = serde_json::to_string_pretty(embeddings)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let papers = parse_papers(r#"[{"paper_id": "a"}, {"paper_id": "b", "title": "T"}]"#)
            .expect("parse should succeed");
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].paper_id, "a");
        assert_eq!(papers[1].title.as_deref(), Some("T"));
    }

    #[test]
    fn test_parse_empty_array() {
        let papers = parse_papers("[]").expect("parse should succeed");
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_papers("{not json");
        assert!(matches!(result, Err(EmbedError::Input(_))));
    }

    #[test]
    fn test_parse_non_array_document() {
        let result = parse_papers(r#"{"paper_id": "a"}"#);
        assert!(matches!(result, Err(EmbedError::Input(_))));
    }

    #[tokio::test]
    async fn test_write_embeddings_pretty_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(OUTPUT_PATH);

        let mut map = EmbeddingMap::new();
        map.insert("a".to_string(), vec![0.25, -1.0]);
        map.insert("b".to_string(), vec![0.5]);

        write_embeddings(&path, &map).await.expect("write should succeed");

        let written = std::fs::read_to_string(&path).expect("read back");
        // Pretty-printed: keys on their own indented lines.
        assert!(written.contains("\n  \"a\""));

        let parsed: EmbeddingMap = serde_json::from_str(&written).expect("reparse");
        assert_eq!(parsed, map);
    }

    #[tokio::test]
    async fn test_write_empty_map() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(OUTPUT_PATH);

        write_embeddings(&path, &EmbeddingMap::new())
            .await
            .expect("write should succeed");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written.trim(), "{}");
    }
}
