use anyhow::Result;
use clap::{Parser, ValueEnum};
use engine::bm25::Bm25Params;
use engine::{EngineConfig, IndexStore, MemoryStore, SearchEngine, SledStore};
use server::build_app;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, ValueEnum)]
enum StoreKind {
    /// Process-local map, nothing survives a restart.
    Memory,
    /// Embedded persistent store under --data-dir.
    Sled,
}

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Index storage backend
    #[arg(long, value_enum, default_value_t = StoreKind::Sled)]
    store: StoreKind,
    /// Data directory for the embedded store
    #[arg(long, default_value = "./data")]
    data_dir: String,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = 1.2)]
    k1: f64,
    /// BM25 length normalization
    #[arg(long, default_value_t = 0.75)]
    b: f64,
    /// Number of results a search returns
    #[arg(long, default_value_t = 3)]
    top_k: usize,
    /// Expiry in seconds applied to persisted keys, for TTL-capable backends
    #[arg(long)]
    ttl_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let store: Arc<dyn IndexStore> = match args.store {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::Sled => Arc::new(SledStore::open(&args.data_dir)?),
    };

    let config = EngineConfig {
        bm25: Bm25Params { k1: args.k1, b: args.b },
        top_k: args.top_k,
        ttl: args.ttl_secs.map(Duration::from_secs),
    };
    let engine = Arc::new(SearchEngine::new(store, config));
    let app = build_app(engine);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
