//! Tests for `-h`.

use crate::support::*;

#[test]
fn test_general_help() {
    let t = Test::new();

    let output = t.run(&["-h"]);
    assert_success(&output);
    assert_stdout_contains(&output, "General help:");
    assert_stdout_contains(&output, "get-by-prefix");
}

#[test]
fn test_action_help() {
    let t = Test::new();

    for (action, heading) in [
        ("get", "Help for 'get' action:"),
        ("put", "Help for 'put' action:"),
        ("put-from-template", "Help for 'put-from-template' action:"),
        ("generate", "Help for 'generate' action:"),
        ("get-by-prefix", "Help for 'get-by-prefix' action:"),
    ] {
        let output = t.run(&["-action", action, "-h"]);
        assert_success(&output);
        assert_stdout_contains(&output, heading);
    }
}

#[test]
fn test_help_does_not_create_config() {
    let t = Test::new();

    assert_success(&t.run(&["--help"]));
    assert!(!t.path("config.json").exists());
}

#[test]
fn test_no_action_usage_lists_every_mode() {
    use predicates::prelude::*;

    let t = Test::new();
    t.cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Individual parameter operations:"))
        .stdout(predicate::str::contains("Get parameters by prefix:"))
        .stderr(predicate::str::contains("run: salter -h"));
}
