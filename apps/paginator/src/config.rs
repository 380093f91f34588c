use anyhow::{Context, Result};

use crate::layout::PackConfig;

/// CLI configuration loaded from environment variables.
/// Every variable has a default, so a bare environment works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub pack: PackConfig,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = PackConfig::default();
        Ok(Config {
            pack: PackConfig {
                paper_width_pt: env_f64("PAPER_WIDTH_PT", defaults.paper_width_pt)?,
                paper_height_pt: env_f64("PAPER_HEIGHT_PT", defaults.paper_height_pt)?,
                first_page_height_reduction_pt: env_f64(
                    "FIRST_PAGE_HEIGHT_REDUCTION_PT",
                    defaults.first_page_height_reduction_pt,
                )?,
                page_padding_pt: env_f64("PAGE_PADDING_PT", defaults.page_padding_pt)?,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("'{key}' must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
