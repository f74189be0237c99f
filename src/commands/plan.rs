//! Plan command handlers

use anyhow::{Context, Result};

use craftree::tree::plan_to_text;
use craftree::{Config, PlanEntry, RecipeSource};

use super::open_store;

pub fn cmd_plan_list(config: &Config, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let names = store.plan_names()?;

    if json {
        let output = serde_json::json!({ "plans": names });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("No saved plans.");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub fn cmd_plan_show(config: &Config, name: &str, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let items = store
        .plan_items(name)
        .with_context(|| format!("reading plan '{}'", name))?;

    if json {
        let entries: Vec<PlanEntry> = items.into_iter().map(PlanEntry::from).collect();
        let output = serde_json::json!({ "name": name, "items": entries });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print!("{}", plan_to_text(&items));
    Ok(())
}
