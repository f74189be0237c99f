//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CraftResult;
use crate::units::{default_units, BatchUnit, UnitTable};

use super::loader::{self, ConfigWarning};

/// Where recipe data and saved plans live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Plans file; defaults to `<dir>/plans.toml`
    #[serde(default)]
    pub plans: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            plans: None,
        }
    }
}

impl DataConfig {
    pub fn plans_path(&self) -> PathBuf {
        self.plans
            .clone()
            .unwrap_or_else(|| self.dir.join("plans.toml"))
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Root shown by `browse` when no plan is named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    #[serde(default = "default_goal")]
    pub goal: String,

    /// Must be positive; checked when the file is loaded
    #[serde(default = "default_count")]
    pub count: u64,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
            count: default_count(),
        }
    }
}

fn default_goal() -> String {
    "minecraft:sticky_piston".to_string()
}

fn default_count() -> u64 {
    100
}

/// Terminal presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Columns of indentation per tree level
    #[serde(default = "default_indent")]
    pub indent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            indent: default_indent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_indent() -> u16 {
    2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Log file used while the interactive browser owns the screen
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default = "default_units")]
    pub units: Vec<BatchUnit>,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            browse: BrowseConfig::default(),
            units: default_units(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CraftResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    pub fn unit_table(&self) -> UnitTable {
        UnitTable::new(self.units.clone())
    }
}
