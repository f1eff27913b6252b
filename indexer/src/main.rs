use anyhow::{Context, Result};
use clap::Parser;
use engine::bm25::Bm25Params;
use engine::tokenizer::tokenize;
use engine::{Document, EngineConfig, IndexStore, SearchEngine, SledStore};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

/// Bulk-load documents into an embedded index, one JSON document per line:
/// { "id": "...", "content": { "string": "...", "object": {...} } }
#[derive(Parser)]
#[command(name = "indexer")]
struct Args {
    /// JSONL input file
    #[arg(long)]
    input: String,
    /// Data directory for the embedded store
    #[arg(long, default_value = "./data")]
    data_dir: String,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = 1.2)]
    k1: f64,
    /// BM25 length normalization
    #[arg(long, default_value_t = 0.75)]
    b: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let store = Arc::new(
        SledStore::open(&args.data_dir)
            .with_context(|| format!("opening store at {}", args.data_dir))?,
    );
    let engine = SearchEngine::new(
        store.clone(),
        EngineConfig {
            bm25: Bm25Params { k1: args.k1, b: args.b },
            ..EngineConfig::default()
        },
    );

    let file = File::open(&args.input).with_context(|| format!("opening {}", args.input))?;
    let mut indexed = 0usize;
    let mut skipped = 0usize;

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: Document = match serde_json::from_str(&line) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(%err, line = line_no + 1, "skipping malformed document");
                skipped += 1;
                continue;
            }
        };
        if doc.id.is_empty() {
            tracing::warn!(line = line_no + 1, "skipping document with empty id");
            skipped += 1;
            continue;
        }

        let tokens = tokenize(&doc.content, &doc.stop_words);
        engine.store_document(&doc.id, &tokens, Some(&doc.content));
        indexed += 1;
        if indexed % 10_000 == 0 {
            tracing::info!(indexed, "progress");
        }
    }

    store.close()?;
    tracing::info!(indexed, skipped, doc_count = engine.doc_count(), "done");
    Ok(())
}
