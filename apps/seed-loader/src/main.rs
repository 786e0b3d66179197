//! Seed loader CLI.
//!
//! Reads a JSON array of posts (without ids), checks each record with the
//! same field rules as create requests, stores each one under a newly
//! generated id, then prints the whole table. Every run mints new ids, so
//! running it twice stores every post twice.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use posts_core::DomainError;
use posts_core::domain::{Post, PostFields};
use posts_core::ports::PostStore;
use posts_core::validation::validate_fields;
use posts_infra::store::{self, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "seed-loader", about = "Seed the posts table from a JSON file")]
struct Args {
    /// JSON file holding an array of posts.
    #[arg(short, long, env = "SEED_FILE", default_value = "data.json")]
    file: PathBuf,

    /// Table to load into (overrides POSTS_TABLE).
    #[arg(short, long)]
    table: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = StoreConfig::from_env()?;
    if let Some(table) = args.table {
        config.table = table;
    }

    let seed = read_seed(&args.file)?;
    tracing::info!(file = %args.file.display(), count = seed.len(), "Seed file loaded");

    let store = store::connect(&config).await?;
    let written = load(store.as_ref(), seed).await?;
    tracing::info!(written, table = %config.table, "Posts written");

    for post in store.scan(None).await? {
        println!("{}", serde_json::to_string(&post)?);
    }

    Ok(())
}

fn read_seed(path: &Path) -> anyhow::Result<Vec<PostFields>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    parse_seed(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

/// Parse the seed array and check every record with the request rules.
///
/// Any invalid record rejects the whole file, so nothing is written.
fn parse_seed(raw: &str) -> anyhow::Result<Vec<PostFields>> {
    let records: Vec<Map<String, Value>> = serde_json::from_str(raw)?;

    let mut seed = Vec::with_capacity(records.len());
    let mut problems = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match validate_fields(record) {
            Ok(fields) => seed.push(fields),
            Err(DomainError::Validation(errors)) => {
                problems.push(format!("record {index}: {}", errors.join(" ")));
            }
            Err(e) => problems.push(format!("record {index}: {e}")),
        }
    }

    if !problems.is_empty() {
        anyhow::bail!("invalid seed records: {}", problems.join("; "));
    }
    Ok(seed)
}

/// Store every seed record under a fresh id. Returns how many were written.
async fn load(store: &dyn PostStore, seed: Vec<PostFields>) -> anyhow::Result<usize> {
    let mut written = 0;
    for fields in seed {
        let post = Post::new(fields);
        store
            .put(&post)
            .await
            .with_context(|| format!("writing post {}", post.id))?;
        written += 1;
    }
    Ok(written)
}
