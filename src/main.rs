use std::path::Path;

use tracing::info;

use specter_embed::embedder::specter::SpecterEmbedder;
use specter_embed::embedder::EmbedderClient;
use specter_embed::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Tracing ───────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("specter_embed=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Input ─────────────────────────────────────────────────────────────────
    let papers = io::read_papers_from_stdin().await?;
    info!(papers = papers.len(), "read paper records from stdin");

    // ── Embed ─────────────────────────────────────────────────────────────────
    let embedder = SpecterEmbedder::new();
    let embeddings = embedder.embed(&papers).await?;
    info!(embeddings = embeddings.len(), "all batches embedded");

    // ── Persist ───────────────────────────────────────────────────────────────
    io::write_embeddings(Path::new(io::OUTPUT_PATH), &embeddings).await?;

    println!("Embedding saved: {}", serde_json::to_string(&embeddings)?);
    Ok(())
}
