//! Shared helpers for CLI integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_craftree")
}

/// `A` ← 2×`B` (makes 3); `planks` ← 1 `#logs` (makes 4); `ingot` ← 9×`nugget`
/// (makes 1); `#logs` = oak, birch
pub fn write_data(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("recipe.json"),
        r##"[
  {"id": 1, "type": "crafting_shaped",
   "ingredients": [{"position": 0, "item": "B", "tag": null},
                   {"position": 1, "item": "B", "tag": null}],
   "result": {"id": "A", "count": 3}},
  {"id": 2, "type": "crafting_shapeless",
   "ingredients": [{"position": 0, "item": null, "tag": "#logs"}],
   "result": {"id": "planks", "count": 4}},
  {"id": 3, "type": "crafting_shaped",
   "ingredients": [{"position": 0, "item": "nugget", "tag": null, "count": 9}],
   "result": {"id": "ingot", "count": 1}}
]"##,
    )
    .unwrap();
    fs::write(
        dir.join("tag.json"),
        r#"[{"tag": "logs", "items": ["oak_log", "birch_log"]}]"#,
    )
    .unwrap();
}

pub fn write_plans(dir: &Path) {
    fs::write(
        dir.join("plans.toml"),
        r##"version = 1

[[plans]]
name = "base"
updated_at = "2026-01-01T00:00:00Z"
items = [
    { item = "A", count = 100 },
    { item = "#logs", count = 64 },
]

[[plans]]
name = "annex"
updated_at = "2026-02-01T00:00:00Z"
items = []
"##,
    )
    .unwrap();
}

/// Run craftree in `cwd` with an isolated home and no `CRAFTREE_*` overrides
pub fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(cwd)
        .env("HOME", cwd.join("home"))
        .env("XDG_CONFIG_HOME", cwd.join("home/.config"))
        .env_remove("CRAFTREE_DATA_DIR")
        .env_remove("CRAFTREE_PLANS")
        .env_remove("CRAFTREE_UNICODE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
