//! Integration tests for `craftree resolve`

mod common;

use tempfile::tempdir;

use common::{run, stderr, stdout, write_data};

#[test]
fn resolve_prints_requirements_text() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));

    let output = run(dir.path(), &["resolve", "A", "100"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Required:\n  68 (1 stack and 4) B\nLeftover:\n  2 (2) A\n"
    );
}

#[test]
fn resolve_json_has_required_and_leftover() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));

    let output = run(dir.path(), &["resolve", "A", "100", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["required"]["B"], 68);
    assert_eq!(json["leftover"]["A"], 2);
    assert_eq!(json["leftover"].as_object().unwrap().len(), 1);
}

#[test]
fn resolve_follows_tags_to_their_first_item() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));

    let output = run(dir.path(), &["resolve", "planks", "10", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "required": { "birch_log": 3 },
            "leftover": { "planks": 2 }
        })
    );
}

#[test]
fn resolve_item_without_recipe_is_its_own_requirement() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));

    let output = run(dir.path(), &["resolve", "#logs", "5", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["required"]["birch_log"], 5);
}

#[test]
fn resolve_reports_quantities_past_u64() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));

    let output = run(dir.path(), &["resolve", "ingot", "4611686018427387904"]);

    assert!(!output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("quantity of nugget is too large to compute"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn resolve_rejects_zero_count() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));

    let output = run(dir.path(), &["resolve", "A", "0"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid quantity '0'"));
}

#[test]
fn resolve_honours_data_flag() {
    let dir = tempdir().unwrap();
    let elsewhere = dir.path().join("elsewhere");
    write_data(&elsewhere);

    let output = run(
        dir.path(),
        &["--data", elsewhere.to_str().unwrap(), "resolve", "A", "3", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["required"]["B"], 2);
    assert!(json["leftover"].as_object().unwrap().is_empty());
}

#[test]
fn missing_data_dir_is_reported() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["resolve", "A", "3"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("data directory not found"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn config_file_sets_data_dir_and_units() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("recipes"));
    std::fs::write(
        dir.path().join("craftree.toml"),
        "[data]\ndir = \"recipes\"\n\n[[units]]\nsize = 10\nname = \"crate\"\nplural = \"crates\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["resolve", "A", "100"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("68 (6 crates and 8) B"));
}

#[test]
fn unknown_config_key_warns() {
    let dir = tempdir().unwrap();
    write_data(&dir.path().join("data"));
    std::fs::write(dir.path().join("craftree.toml"), "[ui]\nunicod = false\n").unwrap();

    let output = run(dir.path(), &["resolve", "A", "3"]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Unknown config key 'unicod'"), "stderr: {}", err);
    assert!(err.contains("Did you mean 'unicode'?"), "stderr: {}", err);
}
