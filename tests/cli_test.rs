//! Integration tests for the ezbp binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ezbp(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("ezbp"));
    cmd.arg("--config")
        .arg(config_dir.path())
        .arg("--non-interactive")
        .env_remove("RUST_LOG");
    cmd
}

fn add(config_dir: &TempDir, name: &str, body: &str) {
    ezbp(config_dir)
        .args(["add", name, body])
        .assert()
        .success();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ezbp"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Expand stored boilerplates"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ezbp"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn first_run_writes_default_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ezbp(&temp).arg("list").assert().success();
    assert!(temp.path().join("config.yml").exists());
    Ok(())
}

#[test]
fn add_then_show_prints_raw_body() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "mail", "Hi {{Name}}");

    ezbp(&temp)
        .args(["show", "mail"])
        .assert()
        .success()
        .stdout("Hi {{Name}}");
    Ok(())
}

#[test]
fn expand_resolves_includes_and_prompts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "letter", "Dear {{Your name}},\n[[sig]]");
    add(&temp, "sig", "{{Tone|Best|Cheers}} wishes");

    ezbp(&temp)
        .args(["expand", "letter"])
        .env("EZBP_PROMPT_YOUR_NAME", "Ada")
        .env("EZBP_PROMPT_TONE", "Cheers")
        .assert()
        .success()
        .stdout("Dear Ada,\nCheers wishes");
    Ok(())
}

#[test]
fn expand_without_name_uses_picked_boilerplate() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "hello", "Hello!");

    ezbp(&temp)
        .env("EZBP_TEMPLATE", "hello")
        .assert()
        .success()
        .stdout("Hello!");
    Ok(())
}

#[test]
fn template_pick_and_boilerplate_prompt_use_separate_variables(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "kind", "Type: {{Boilerplate}}");

    ezbp(&temp)
        .env("EZBP_TEMPLATE", "kind")
        .env("EZBP_PROMPT_BOILERPLATE", "memo")
        .assert()
        .success()
        .stdout("Type: memo");

    ezbp(&temp)
        .env_remove("EZBP_TEMPLATE")
        .env("EZBP_PROMPT_BOILERPLATE", "kind")
        .assert()
        .failure()
        .stderr(predicate::str::contains("EZBP_TEMPLATE"));
    Ok(())
}

#[test]
fn expand_unknown_reference_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "broken", "before [[missing]]");

    ezbp(&temp)
        .args(["expand", "broken"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("missing"));
    Ok(())
}

#[test]
fn expand_cycle_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("config.yml"), "max_inclusions: 10\n")?;
    add(&temp, "a", "x[[b]]");
    add(&temp, "b", "y[[a]]");

    ezbp(&temp)
        .args(["expand", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cyclic reference"));
    Ok(())
}

#[test]
fn expand_missing_prompt_answer_names_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "ask", "{{Color}}");

    ezbp(&temp)
        .args(["expand", "ask"])
        .env_remove("EZBP_PROMPT_COLOR")
        .assert()
        .failure()
        .stderr(predicate::str::contains("EZBP_PROMPT_COLOR"));
    Ok(())
}

#[test]
fn forever_needs_interactive_ui() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "a", "A");

    ezbp(&temp)
        .args(["expand", "--forever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--forever"));
    Ok(())
}

#[test]
fn list_orders_by_usage() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "alpha", "first");
    add(&temp, "zulu", "second");
    ezbp(&temp).args(["expand", "zulu"]).assert().success();

    let output = ezbp(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listed[0]["name"], "zulu");
    assert_eq!(listed[0]["usage_count"], 1);
    assert_eq!(listed[1]["name"], "alpha");
    Ok(())
}

#[test]
fn edit_and_delete() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "sig", "old");

    ezbp(&temp).args(["edit", "sig", "new"]).assert().success();
    ezbp(&temp).args(["show", "sig"]).assert().stdout("new");

    ezbp(&temp).args(["rm", "sig"]).assert().success();
    ezbp(&temp)
        .args(["show", "sig"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown boilerplate 'sig'"));
    Ok(())
}

#[test]
fn add_existing_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "sig", "one");

    ezbp(&temp)
        .args(["add", "sig", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    Ok(())
}

#[test]
fn import_csv_with_update_policy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "sig", "old");
    let csv = temp.path().join("in.csv");
    fs::write(&csv, "name,value\nsig,new\nhello,Hi there\n")?;

    ezbp(&temp)
        .args(["import", "--on-conflict", "update"])
        .arg(&csv)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 added, 1 updated"));
    ezbp(&temp).args(["show", "sig"]).assert().stdout("new");
    Ok(())
}

#[test]
fn import_conflict_needs_policy_when_non_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add(&temp, "sig", "old");
    let csv = temp.path().join("in.csv");
    fs::write(&csv, "name,value\nsig,new\n")?;

    ezbp(&temp)
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--on-conflict"));
    Ok(())
}

#[test]
fn quiet_hides_status_but_not_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ezbp(&temp)
        .args(["-q", "add", "sig", "text"])
        .assert()
        .success()
        .stderr("");
    ezbp(&temp)
        .args(["-q", "expand", "sig"])
        .assert()
        .stdout("text");
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ezbp"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ezbp"));
    Ok(())
}
