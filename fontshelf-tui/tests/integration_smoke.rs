//! Smoke tests for the `fontshelf` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

struct Fixture {
    config: NamedTempFile,
    fonts: NamedTempFile,
}

fn fixture(config: &str) -> Fixture {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, "{}", config).unwrap();

    let mut fonts = NamedTempFile::new().unwrap();
    writeln!(fonts, "Helvetica\nAvenir\n\nArial\nBodoni Ornaments\nzapfino").unwrap();

    Fixture {
        config: config_file,
        fonts,
    }
}

fn fontshelf(fixture: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("fontshelf").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(fixture.config.path())
        .arg("--fonts-file")
        .arg(fixture.fonts.path());
    cmd
}

// === Help ===

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("fontshelf").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("fontshelf").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Case-insensitive substring"));
}

// === List ===

#[test]
fn test_list_grouped() {
    let fixture = fixture("");
    let mut cmd = fontshelf(&fixture);
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout("A\n  Arial\n  Avenir\nH\n  Helvetica\n");
}

#[test]
fn test_list_query_includes_excluded_family() {
    let fixture = fixture("");
    let mut cmd = fontshelf(&fixture);
    cmd.arg("list").arg("--query").arg("A");

    cmd.assert()
        .success()
        .stdout("Arial\nAvenir\nBodoni Ornaments\nHelvetica\nzapfino\n");
}

#[test]
fn test_list_query_respects_hiding_policy() {
    let fixture = fixture("[catalog]\nhide_excluded_in_search = true\n");
    let mut cmd = fontshelf(&fixture);
    cmd.arg("list").arg("-q").arg("orn");

    cmd.assert().success().stdout("");
}

#[test]
fn test_list_json() {
    let fixture = fixture("");
    let mut cmd = fontshelf(&fixture);
    cmd.arg("list").arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"A\""))
        .stdout(predicate::str::contains("\"Helvetica\""))
        .stdout(predicate::str::contains("Bodoni").not());
}

#[test]
fn test_missing_config_fails() {
    let mut cmd = Command::cargo_bin("fontshelf").unwrap();
    cmd.arg("--config")
        .arg("/nonexistent/fontshelf.toml")
        .arg("list");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
