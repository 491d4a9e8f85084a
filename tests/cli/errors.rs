//! Tests for flag validation and exit status.

use crate::support::*;

#[test]
fn test_no_action_shows_usage_and_fails() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
    assert_stdout_contains(&output, "Usage:");
    assert_stderr_contains(&output, "no action specified");
}

#[test]
fn test_get_requires_name() {
    let t = Test::new();

    let output = t.run(&["--action", "get"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-name is required for 'get' and 'put' actions");
    assert_stderr_contains(&output, "salter --action <action> -h");
}

#[test]
fn test_put_requires_name() {
    let t = Test::new();

    let output = t.run(&["-action", "put", "-value", "x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-name is required");
}

#[test]
fn test_put_requires_value() {
    let t = Test::new();

    let output = t.run(&["--action", "put", "--name", "/app/key"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-value is required for 'put' action");
}

#[test]
fn test_put_rejects_unknown_type() {
    let t = Test::new();

    let output = t.run(&[
        "--action", "put", "--name", "/app/key", "--value", "v", "--type", "binary",
    ]);
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Invalid type. Use 'string', 'stringlist', or 'securestring'",
    );
}

#[test]
fn test_generate_requires_source_and_output() {
    let t = Test::new();

    let output = t.run(&["--action", "generate", "-s", "app.env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-s <env-file> and -o <output.json> required");
}

#[test]
fn test_put_from_template_requires_source() {
    let t = Test::new();

    let output = t.run(&["--action", "put-from-template"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-s <filename.json> is required");
}

#[test]
fn test_get_by_prefix_requires_output() {
    let t = Test::new();

    let output = t.run(&["--action", "get-by-prefix", "--prefix", "/prod/app/"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-prefix and -o <output-base> required");
}

#[test]
fn test_unknown_action_fails() {
    let t = Test::new();

    let output = t.run(&["--action", "delete"]);
    assert_failure(&output);
}

#[test]
fn test_unknown_flag_fails() {
    let t = Test::new();

    let output = t.run(&["--bogus"]);
    assert_failure(&output);
}

#[test]
fn test_invalid_config_is_reported() {
    let t = Test::new();
    t.write("config.json", "{not json");
    t.write("app.env", "HOST=x\n");

    let output = t.generate("app.env", "task.json");
    assert_failure(&output);
    assert_stderr_contains(&output, "config.json");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "salter");
}

#[test]
fn test_get_rejects_empty_name() {
    let t = Test::new();

    let output = t.run(&["--action", "get", "--name", ""]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-name is required for 'get' and 'put' actions");
}

#[test]
fn test_get_by_prefix_rejects_empty_prefix() {
    let t = Test::new();

    let output = t.run(&["--action", "get-by-prefix", "--prefix", "", "-o", "x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-prefix and -o <output-base> required");
    assert!(!t.path("x.env").exists());
}

#[test]
fn test_generate_rejects_empty_output() {
    let t = Test::new();
    t.write("app.env", "HOST=x\n");

    let output = t.run(&["--action", "generate", "-s", "app.env", "-o", ""]);
    assert_failure(&output);
    assert_stderr_contains(&output, "-s <env-file> and -o <output.json> required");
}
