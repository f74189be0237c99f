//! Browse command handler
//!
//! Opens the two-pane browser on a saved plan or on a single goal.

use anyhow::{bail, Context, Result};

use craftree::ui::app::run_interactive;
use craftree::ui::list::ListStyle;
use craftree::ui::terminal::detect_capabilities;
use craftree::{Config, ItemId, Node, TreeContext};

use super::open_store;

pub fn cmd_browse(
    config: &Config,
    plan: Option<String>,
    goal: Option<String>,
    count: Option<u64>,
) -> Result<()> {
    let caps = detect_capabilities();
    if !caps.is_tty {
        bail!("browse needs an interactive terminal; use 'craftree resolve' for scripted output");
    }

    let store = open_store(config)?;
    let units = config.unit_table();
    let ctx = TreeContext::new(&store, &units);

    let root = match &plan {
        Some(name) => Node::plan(&ctx, name).with_context(|| format!("opening plan '{}'", name))?,
        None => {
            let goal = goal.unwrap_or_else(|| config.browse.goal.clone());
            let count = count.unwrap_or(config.browse.count);
            Node::ingredient(ItemId::parse(&goal), count)
        }
    };

    let style = ListStyle {
        indent: usize::from(config.ui.indent),
        unicode: config.ui.unicode && caps.supports_unicode,
    };

    run_interactive(ctx, root, plan, style, caps.supports_color)?;
    Ok(())
}
