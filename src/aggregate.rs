//! Quantity aggregation
//!
//! Collapses `(item, quantity)` pair lists into per-item totals and builds
//! the requirements snapshot shown next to the crafting tree.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CraftError, CraftResult};
use crate::models::ItemId;

/// Sum quantities per item; fails if a total exceeds `u64::MAX`
pub fn collapse<I>(pairs: I) -> CraftResult<BTreeMap<ItemId, u64>>
where
    I: IntoIterator<Item = (ItemId, u64)>,
{
    let mut totals = BTreeMap::new();
    for (item, count) in pairs {
        match totals.entry(item) {
            Entry::Vacant(slot) => {
                slot.insert(count);
            }
            Entry::Occupied(mut slot) => {
                let total = slot.get().checked_add(count).ok_or_else(|| {
                    CraftError::QuantityOverflow {
                        item: slot.key().to_string(),
                    }
                })?;
                *slot.get_mut() = total;
            }
        }
    }
    Ok(totals)
}

/// Required and leftover totals for the current tree state.
///
/// A projection only; rebuild it after every tree mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub required: BTreeMap<ItemId, u64>,
    pub leftover: BTreeMap<ItemId, u64>,
}

impl Requirements {
    pub fn from_pairs(
        required: Vec<(ItemId, u64)>,
        leftover: Vec<(ItemId, u64)>,
    ) -> CraftResult<Self> {
        Ok(Self {
            required: collapse(required)?,
            leftover: collapse(leftover)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.leftover.is_empty()
    }
}
