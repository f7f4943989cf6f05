//! # Pawsbot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `pawsbot` binary: standard flags, unknown
//! commands, and configuration errors surfaced before any command runs.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_main_help_flag() {
    pawsbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat").and(predicate::str::contains("ask")));
}

#[test]
fn test_main_version_flag() {
    pawsbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    pawsbot_cmd().arg("checkout").assert().failure();
}

#[test]
fn test_invalid_config_file_reports_error() {
    let sandbox = Sandbox::new();
    let config = sandbox.write("bad.toml", "[chat]\nbot_name = \"\"\n");

    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bot_name cannot be empty"));
}

#[test]
fn test_project_config_is_discovered() {
    let sandbox = Sandbox::new();
    let rules = sandbox.write("rules.toml", CUSTOM_RULES);
    sandbox.write(
        ".pawsbot.toml",
        &format!("[rules]\nfile = {:?}\n", rules.to_string_lossy()),
    );

    sandbox
        .cmd()
        .args(["ask", "Any snacks for my corgi?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Treats are 2-for-1 this week!"));
}

#[test]
fn test_relative_rules_path_is_relative_to_project_config() {
    let sandbox = Sandbox::new();
    sandbox.write("rules.toml", CUSTOM_RULES);
    sandbox.write(".pawsbot.toml", "[rules]\nfile = \"rules.toml\"\n");
    let nested = sandbox.mkdir("collections/winter");

    sandbox
        .cmd()
        .current_dir(&nested)
        .args(["ask", "Any snacks for my corgi?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Treats are 2-for-1 this week!"));
}

#[test]
fn test_project_config_restating_default_name_wins_over_user() {
    let sandbox = Sandbox::new();
    // XDG_CONFIG_HOME points at <sandbox>/.config.
    sandbox.mkdir(".config/pawsbot");
    sandbox.write(
        ".config/pawsbot/config.toml",
        "[chat]\nbot_name = \"UserBot\"\ngreeting = \"\"\n",
    );
    sandbox.write(".pawsbot.toml", "[chat]\nbot_name = \"Pawsley\"\n");

    sandbox
        .cmd()
        .args(["chat", "--no-delay"])
        .write_stdin("Do you ship to Berlin?\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pawsley: We ship worldwide!"))
        .stdout(predicate::str::contains("UserBot").not());
}

#[test]
fn test_cli_rules_override_missing_configured_table() {
    let sandbox = Sandbox::new();
    let rules = sandbox.write("rules.toml", CUSTOM_RULES);
    let config = sandbox.write("pawsbot.toml", "[rules]\nfile = \"moved-away.toml\"\n");

    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["ask", "Time for a walk?", "--rules"])
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("reflective leashes"));

    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["ask", "Time for a walk?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
