use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn recipebook(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recipebook").unwrap();
    cmd.env("RECIPEBOOK_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_json(home: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(home.join("recipes.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn list_shows_seed_recipes_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spaghetti Bolognese"))
        .stdout(predicate::str::contains("Pancakes"));

    assert!(!temp_dir.path().join("recipes.json").exists());
}

#[test]
fn add_persists_and_list_filters_by_name() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["add", "Tacos", "Tortilla, Beef, Cheese"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added"));

    let stored = stored_json(temp_dir.path());
    let recipes = stored.as_array().unwrap();
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[2]["name"], "Tacos");
    assert!(recipes[2]["id"].as_u64().unwrap() > 2);

    recipebook(temp_dir.path())
        .args(["ls", "-s", "TACO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tacos"))
        .stdout(predicate::str::contains("Pancakes").not());
}

#[test]
fn add_with_blank_name_fails_and_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["add", "   ", "Eggs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));

    assert!(!temp_dir.path().join("recipes.json").exists());
}

#[test]
fn update_changes_only_given_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["update", "2", "--name", "Fluffy Pancakes"])
        .assert()
        .success();

    let stored = stored_json(temp_dir.path());
    assert_eq!(stored[1]["id"], 2);
    assert_eq!(stored[1]["name"], "Fluffy Pancakes");
    assert_eq!(stored[1]["ingredients"], "Flour, Milk, Eggs, Syrup");
}

#[test]
fn update_unknown_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["update", "99", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 99"));
}

#[test]
fn delete_removes_recipe() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe deleted"));

    let stored = stored_json(temp_dir.path());
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["name"], "Pancakes");

    recipebook(temp_dir.path())
        .args(["view", "1"])
        .assert()
        .failure();
}

#[test]
fn view_lists_ingredients() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Tomato"));
}

#[test]
fn corrupt_data_falls_back_to_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("recipes.json"), "not json at all").unwrap();

    recipebook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pancakes"));
}

#[test]
fn shell_session_keeps_add_page_recipes_separate() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = "\
page add
name Waffles
ingredients Flour, Eggs
save
list
page home
edit 2
name Crepes
save
quit
";

    recipebook(temp_dir.path())
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added"))
        .stdout(predicate::str::contains("Recipe updated (2): Crepes"));

    let stored = stored_json(temp_dir.path());
    let names: Vec<&str> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Spaghetti Bolognese", "Crepes", "Waffles"]);

    // The add page starts empty in a new session
    recipebook(temp_dir.path())
        .arg("shell")
        .write_stdin("page add\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn config_set_changes_storage_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["config", "storage-key", "kitchen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to kitchen"));

    recipebook(temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("kitchen.json"));

    recipebook(temp_dir.path())
        .args(["add", "Soup", "Water"])
        .assert()
        .success();
    assert!(temp_dir.path().join("kitchen.json").exists());
    assert!(!temp_dir.path().join("recipes.json").exists());
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_dir = tempfile::tempdir().unwrap();
    let flag_dir = tempfile::tempdir().unwrap();

    recipebook(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["add", "Soup", "Water"])
        .assert()
        .success();

    assert!(flag_dir.path().join("recipes.json").exists());
    assert!(!env_dir.path().join("recipes.json").exists());
}

#[test]
fn storage_key_cannot_clobber_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebook(temp_dir.path())
        .args(["config", "pretty-json", "true"])
        .assert()
        .success();

    recipebook(temp_dir.path())
        .args(["config", "storage-key", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid storage key"));

    recipebook(temp_dir.path())
        .args(["add", "Soup", "Water"])
        .assert()
        .success();

    recipebook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup"));

    let config: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("config.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(config["storage_key"], "recipes");
    assert_eq!(config["pretty_json"], true);
    assert!(temp_dir.path().join("recipes.json").exists());
}

#[test]
fn corrupt_data_is_backed_up_when_overwritten() {
    let temp_dir = tempfile::tempdir().unwrap();
    let raw = r#"[{"id":1,"name":"Kept","ingredients":"Salt"},{"id":"two"}]"#;
    std::fs::write(temp_dir.path().join("recipes.json"), raw).unwrap();

    recipebook(temp_dir.path())
        .args(["add", "Soup", "Water"])
        .assert()
        .success();

    let backup = std::fs::read_to_string(temp_dir.path().join("recipes.bak.json")).unwrap();
    assert_eq!(backup, raw);
    let stored = stored_json(temp_dir.path());
    assert_eq!(stored.as_array().unwrap().len(), 3);
}
