use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paginator::config::Config;
use paginator::layout::pack;
use paginator::measure::RawMeasuredBlock;

/// Packs a dump of measured experience blocks into a print configuration.
///
/// Input: a JSON array of pixel-unit block measurements (as captured from the
/// rendered resume). Output: the print config JSON on stdout, suitable for
/// persisting alongside the resume.
fn main() -> Result<()> {
    // Load configuration first (geometry overrides come from the environment)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path: PathBuf = match std::env::args_os().nth(1) {
        Some(arg) => arg.into(),
        None => bail!("usage: paginator <measurements.json>"),
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read measurements from {}", path.display()))?;
    let raw_blocks: Vec<RawMeasuredBlock> =
        serde_json::from_str(&raw).context("Measurements file is not valid JSON")?;

    info!(blocks = raw_blocks.len(), "Packing measured experience blocks");

    let blocks: Vec<_> = raw_blocks
        .into_iter()
        .map(RawMeasuredBlock::into_points)
        .collect();
    let print_config = pack(&blocks, &config.pack)?;

    info!(pages = print_config.pages.len(), "Pagination complete");
    println!("{}", serde_json::to_string_pretty(&print_config)?);

    Ok(())
}
