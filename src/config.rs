//! Configuration module for Craftree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (CRAFTREE_*)
//! 3. Explicit `--config` file, else `./craftree.toml`
//! 4. User config (~/.config/craftree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{BrowseConfig, Config, DataConfig, LogConfig, UiConfig};
