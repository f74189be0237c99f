use std::path::PathBuf;

use clap::{Parser, Subcommand};

use craftree::CraftError;

/// Craftree - crafting tree browser and raw material planner
#[derive(Parser, Debug)]
#[command(name = "craftree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'craftree' without a command to browse the configured goal.")]
pub struct Cli {
    /// Config file (default: ./craftree.toml, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding recipe.json and tag.json
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a crafting tree interactively
    Browse {
        /// Open a saved plan instead of a single goal
        #[arg(long, conflicts_with_all = ["goal", "count"])]
        plan: Option<String>,

        /// Goal item (prefix with # for a tag)
        #[arg(long)]
        goal: Option<String>,

        /// How many of the goal to make
        #[arg(long, value_parser = parse_quantity)]
        count: Option<u64>,
    },

    /// Expand every node with its first choice and print the requirements
    Resolve {
        /// Item to make (prefix with # for a tag)
        item: String,

        /// How many to make
        #[arg(value_parser = parse_quantity)]
        count: u64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect saved plans
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// List saved plans
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show the items of a plan
    Show {
        name: String,

        #[arg(long)]
        json: bool,
    },
}

/// A positive integer quantity
pub fn parse_quantity(text: &str) -> Result<u64, CraftError> {
    match text.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CraftError::InvalidQuantity {
            text: text.to_string(),
        }),
    }
}
