//! Human-readable quantities
//!
//! Expresses a raw amount as whole batch units (chests, stacks, ...) with
//! the loose remainder last, e.g. `130` → `2 stacks and 2`.

use serde::{Deserialize, Serialize};

/// A named batch size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchUnit {
    pub size: u64,
    pub name: String,
    pub plural: String,
}

impl BatchUnit {
    pub fn new(size: u64, name: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            size,
            name: name.into(),
            plural: plural.into(),
        }
    }
}

/// Units used when none are configured: shulker-box chests, chests, stacks.
pub fn default_units() -> Vec<BatchUnit> {
    vec![
        BatchUnit::new(
            64 * 27 * 27,
            "chest of shulker boxes",
            "chests of shulker boxes",
        ),
        BatchUnit::new(64 * 27, "chest", "chests"),
        BatchUnit::new(64, "stack", "stacks"),
    ]
}

/// Ordered set of batch units, largest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: Vec<BatchUnit>,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new(default_units())
    }
}

impl UnitTable {
    /// Build a table; zero-sized units are dropped and the rest sorted descending
    pub fn new(mut units: Vec<BatchUnit>) -> Self {
        units.retain(|u| u.size > 0);
        units.sort_by(|a, b| b.size.cmp(&a.size));
        Self { units }
    }

    pub fn units(&self) -> &[BatchUnit] {
        &self.units
    }

    /// Render `amount` as a sum of the largest fitting units
    pub fn render(&self, amount: u64) -> String {
        let mut parts = Vec::new();
        let mut rest = amount;
        for unit in &self.units {
            let count = rest / unit.size;
            rest %= unit.size;
            if count > 0 {
                let name = if count > 1 { &unit.plural } else { &unit.name };
                parts.push(format!("{} {}", count, name));
            }
        }
        if rest > 0 || parts.is_empty() {
            parts.push(rest.to_string());
        }
        parts.join(" and ")
    }
}
