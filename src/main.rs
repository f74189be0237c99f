//! Craftree CLI - crafting tree browser and raw material planner
//!
//! Usage: craftree [COMMAND]
//!
//! Commands:
//!   browse   Browse a crafting tree interactively (default)
//!   resolve  Expand everything and print the requirements
//!   plan     Inspect saved plans

mod cli;
mod commands;

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use cli::{Cli, Commands, PlanCommands};
use craftree::config::{self, ConfigWarning};
use craftree::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, warnings) =
        config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    print_config_warnings(&warnings);
    if let Some(dir) = &cli.data {
        config.data.dir = dir.clone();
    }

    let interactive = matches!(cli.command, None | Some(Commands::Browse { .. }));
    init_logging(cli.verbose, &config, interactive)?;

    match cli.command {
        None => commands::browse::cmd_browse(&config, None, None, None),
        Some(Commands::Browse { plan, goal, count }) => {
            commands::browse::cmd_browse(&config, plan, goal, count)
        }
        Some(Commands::Resolve { item, count, json }) => {
            commands::resolve::cmd_resolve(&config, &item, count, json)
        }
        Some(Commands::Plan { action }) => match action {
            PlanCommands::List { json } => commands::plan::cmd_plan_list(&config, json),
            PlanCommands::Show { name, json } => {
                commands::plan::cmd_plan_show(&config, &name, json)
            }
        },
    }
}

/// `-v` raises the default level; `RUST_LOG` still wins. While the browser
/// owns the screen, records go to `[log] file` or nowhere.
fn init_logging(verbose: u8, config: &Config, interactive: bool) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level));
    builder.format_timestamp_millis();

    if interactive {
        let target: Box<dyn std::io::Write + Send> = match &config.log.file {
            Some(path) => Box::new(open_log_file(path)?),
            None => Box::new(std::io::sink()),
        };
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.try_init().context("initialising logger")?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
