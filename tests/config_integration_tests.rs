mod common;

use predicates::prelude::*;

use common::{EXIT_INPUT_ERROR_STATUS, TestFixture};

#[test]
fn local_config_selects_json_output() {
    let fixture = TestFixture::new("1", "1");
    fixture.create_config("[output]\nformat = \"json\"\n");

    judge_checker!()
        .current_dir(fixture.path())
        .args(fixture.args())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"verdict\": \"Accepted\""));
}

#[test]
fn cli_format_overrides_config() {
    let fixture = TestFixture::new("1", "1");
    fixture.create_config("[output]\nformat = \"json\"\n");

    judge_checker!()
        .current_dir(fixture.path())
        .args(fixture.args())
        .args(["--format", "text"])
        .assert()
        .code(0)
        .stdout("Result: 0\n");
}

#[test]
fn config_can_disable_status_line() {
    let fixture = TestFixture::new("1", "2");
    fixture.create_config("[output]\nstatus_line = false\n");

    judge_checker!()
        .current_dir(fixture.path())
        .args(fixture.args())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn no_config_ignores_local_config() {
    let fixture = TestFixture::new("1", "1");
    fixture.create_config("[output]\nformat = \"json\"\n");

    judge_checker!()
        .current_dir(fixture.path())
        .args(fixture.args())
        .arg("--no-config")
        .assert()
        .code(0)
        .stdout("Result: 0\n");
}

#[test]
fn explicit_config_path_is_used() {
    let fixture = TestFixture::new("1", "1");
    fixture.create_file("checker.toml", b"[output]\nstatus_line = false\n");

    judge_checker!()
        .args(fixture.args())
        .arg("--config")
        .arg(fixture.file("checker.toml"))
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_explicit_config_is_an_input_error() {
    let fixture = TestFixture::new("1", "1");

    judge_checker!()
        .args(fixture.args())
        .arg("--config")
        .arg(fixture.file("absent.toml"))
        .assert()
        .code(EXIT_INPUT_ERROR_STATUS)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn invalid_config_is_an_input_error() {
    let fixture = TestFixture::new("1", "1");
    fixture.create_config("[output]\nformat = \"xml\"\n");

    judge_checker!()
        .current_dir(fixture.path())
        .args(fixture.args())
        .assert()
        .code(EXIT_INPUT_ERROR_STATUS)
        .stderr(predicate::str::contains("Config"));
}
