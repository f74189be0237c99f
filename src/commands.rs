//! Subcommand handlers

pub mod browse;
pub mod plan;
pub mod resolve;

use anyhow::{Context, Result};

use craftree::{Config, JsonStore};

/// Open the recipe data and plans file named by `config`
pub fn open_store(config: &Config) -> Result<JsonStore> {
    let dir = &config.data.dir;
    JsonStore::open(dir, config.data.plans_path())
        .with_context(|| format!("loading recipe data from {}", dir.display()))
}
