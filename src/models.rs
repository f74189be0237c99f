//! Core data models for Craftree
//!
//! Identifiers and lookup rows shared by the store and the crafting tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix that marks a tag identifier
pub const TAG_PREFIX: char = '#';

/// An item or tag identifier.
///
/// Tags are written with a leading `#` (e.g. `#minecraft:planks`); the
/// stored name never includes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemId {
    Item(String),
    Tag(String),
}

impl ItemId {
    /// Parse a raw identifier, treating a leading `#` as a tag marker
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix(TAG_PREFIX) {
            Some(tag) => ItemId::Tag(tag.to_string()),
            None => ItemId::Item(raw.to_string()),
        }
    }

    pub fn item(name: impl Into<String>) -> Self {
        ItemId::Item(name.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(TAG_PREFIX) {
            Some(stripped) => ItemId::Tag(stripped.to_string()),
            None => ItemId::Tag(name),
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, ItemId::Tag(_))
    }

    /// Name without the tag marker
    pub fn name(&self) -> &str {
        match self {
            ItemId::Item(name) | ItemId::Tag(name) => name,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Item(name) => write!(f, "{}", name),
            ItemId::Tag(name) => write!(f, "{}{}", TAG_PREFIX, name),
        }
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        ItemId::parse(&raw)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        ItemId::parse(raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

/// One candidate recipe for an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub id: u32,
    pub craft_type: String,
    /// Units of the result item produced per execution
    pub result_count: u64,
}

/// One ingredient slot of a recipe; exactly one of `item` / `tag` is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub item: Option<String>,
    pub tag: Option<String>,
    pub quantity: u64,
}

impl IngredientRow {
    pub fn id(&self) -> Option<ItemId> {
        match (&self.item, &self.tag) {
            (Some(item), _) => Some(ItemId::item(item.clone())),
            (None, Some(tag)) => Some(ItemId::tag(tag.clone())),
            (None, None) => None,
        }
    }
}

/// A demand line of a saved plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub item: ItemId,
    pub count: u64,
}

impl From<(ItemId, u64)> for PlanEntry {
    fn from((item, count): (ItemId, u64)) -> Self {
        Self { item, count }
    }
}

impl From<PlanEntry> for (ItemId, u64) {
    fn from(entry: PlanEntry) -> Self {
        (entry.item, entry.count)
    }
}
