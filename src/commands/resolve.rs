//! Resolve command handler
//!
//! Expands the whole tree with the first recipe and first tag item at every
//! step, then prints what has to be gathered and what is left over.

use std::collections::BTreeMap;

use anyhow::Result;

use craftree::tree::AUTO_EXPAND_DEPTH;
use craftree::{Config, ItemId, Node, Requirements, TreeContext, UnitTable};

use super::open_store;

pub fn cmd_resolve(config: &Config, item: &str, count: u64, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let units = config.unit_table();
    let ctx = TreeContext::new(&store, &units);

    let mut root = Node::ingredient(ItemId::parse(item), count);
    root.expand_all(&ctx, AUTO_EXPAND_DEPTH)?;
    let (required, leftover) = root.ingredients(&ctx)?;
    let requirements = Requirements::from_pairs(required, leftover)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&requirements)?);
    } else {
        print!("{}", render_requirements(&requirements, &units));
    }
    Ok(())
}

fn render_requirements(requirements: &Requirements, units: &UnitTable) -> String {
    let mut out = String::new();
    render_group(&mut out, "Required", &requirements.required, units);
    render_group(&mut out, "Leftover", &requirements.leftover, units);
    out
}

fn render_group(out: &mut String, label: &str, totals: &BTreeMap<ItemId, u64>, units: &UnitTable) {
    out.push_str(label);
    out.push_str(":\n");
    if totals.is_empty() {
        out.push_str("  (none)\n");
    }
    for (item, count) in totals {
        out.push_str(&format!("  {} ({}) {}\n", count, units.render(*count), item));
    }
}
