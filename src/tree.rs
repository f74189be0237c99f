//! Crafting tree node model
//!
//! A plan or goal item expands into recipe choices, recipes expand into
//! ingredients, tags expand into concrete items. Each node knows how to
//! lazily build its children, react to input, and report the raw items it
//! needs once the user has expanded it as far as they want to craft.
//!
//! # Module Structure
//!
//! - `chooser` - cyclable set of alternatives
//! - `node` - `Node` and its variants
//! - `plan_text` - plan item list as editable text
//! - `title` - styled node labels

mod chooser;
mod node;
mod plan_text;
mod title;

use crate::models::ItemId;
use crate::store::RecipeSource;
use crate::units::UnitTable;

pub use chooser::Chooser;
pub use node::{
    batch_surplus, executions, AmountNode, Contribution, HeadingNode, IngredientNode, Node,
    NodeKind, Pair, PlanNode, RecipeNode, TagNode, AUTO_EXPAND_DEPTH,
};
pub use plan_text::{parse_plan_text, plan_to_text};
pub use title::{Span, SpanStyle, Title};

/// Key that splits or re-merges an ingredient node
pub const SPLIT_KEY: char = 's';

/// Abstract input alphabet shared by the list widgets and the nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Select,
    Quit,
    /// Command keys outside the navigation set
    Char(char),
}

/// Supplies free-text answers the nodes cannot produce themselves
pub trait Prompter {
    /// Ask where to split `count` of `item`; `None` when cancelled
    fn split_point(&mut self, item: &ItemId, count: u64) -> Option<String>;
}

/// Prompter that cancels every request
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn split_point(&mut self, _item: &ItemId, _count: u64) -> Option<String> {
        None
    }
}

/// Lookups and formatting shared by every node of a tree
#[derive(Clone, Copy)]
pub struct TreeContext<'a> {
    pub source: &'a dyn RecipeSource,
    pub units: &'a UnitTable,
}

impl<'a> TreeContext<'a> {
    pub fn new(source: &'a dyn RecipeSource, units: &'a UnitTable) -> Self {
        Self { source, units }
    }
}
