//! Craftree - crafting tree browser and raw material planner
//!
//! Craftree lets you pick a goal item (or a saved plan of several), then
//! walk down its crafting tree choosing recipes and tag items as you go.
//! Whatever is left unexpanded is treated as "obtain directly"; the
//! totals of those leaves, plus the surplus of partial batches, form the
//! requirements list shown beside the tree.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tree;
pub mod ui;
pub mod units;

// Re-exports for convenience
pub use aggregate::{collapse, Requirements};
pub use config::Config;
pub use error::{CraftError, CraftResult};
pub use models::{ItemId, PlanEntry};
pub use store::{JsonStore, RecipeBook, RecipeSource};
pub use tree::{Input, Node, NodeKind, TreeContext};
pub use units::UnitTable;
