//! Error types for Craftree
//!
//! Library code returns [`CraftResult`]; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Craftree operations
pub type CraftResult<T> = Result<T, CraftError>;

/// Main error type for Craftree operations
#[derive(Error, Debug)]
pub enum CraftError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe or tag data file could not be parsed
    #[error("invalid data file {file}: {message}")]
    Json { file: PathBuf, message: String },

    /// Plans file exists but is not valid TOML
    #[error("plans file {file} is corrupted: {message}")]
    PlanStore { file: PathBuf, message: String },

    /// Plans could not be serialized for writing
    #[error("failed to serialize plans: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config file is not valid TOML
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// No plan with this name exists
    #[error("no plan named '{name}'")]
    UnknownPlan { name: String },

    /// Data directory missing
    #[error("data directory not found: {path}")]
    DataDirNotFound { path: PathBuf },

    /// A quantity argument was not a positive integer
    #[error("invalid quantity '{text}' - expected a positive integer")]
    InvalidQuantity { text: String },

    /// A scaled or summed quantity no longer fits in 64 bits
    #[error("quantity of {item} is too large to compute")]
    QuantityOverflow { item: String },
}
