//! Tests for `--action generate`.

use crate::support::*;
use serde_json::Value;

const CERT: &str = "\
CERT=-----BEGIN CERTIFICATE-----
MIIBszCCAVmgAwIBAgIU
-----END CERTIFICATE-----
";

fn secrets(t: &Test, file: &str) -> Vec<Value> {
    let json: Value = serde_json::from_str(&t.read(file)).unwrap();
    json["containerDefinitions"][0]["secrets"]
        .as_array()
        .cloned()
        .unwrap()
}

fn secret<'a>(secrets: &'a [Value], name: &str) -> &'a Value {
    secrets
        .iter()
        .find(|s| s["name"] == name)
        .unwrap_or_else(|| panic!("no secret named {}", name))
}

#[test]
fn test_generate_classifies_entries() {
    let t = Test::new();
    t.write(
        "app.env",
        "# service settings\nNAME=John Doe\nDB_PASSWORD=pw\nPORT=8080\n",
    );

    let output = t.generate("app.env", "task.json");
    assert_success(&output);
    assert_stdout_contains(&output, "Generated task definition saved to");

    let secrets = secrets(&t, "task.json");
    assert_eq!(secrets.len(), 3);

    let name = secret(&secrets, "NAME");
    assert_eq!(name["type"], "String");
    assert_eq!(name["value"], "John Doe");
    assert_eq!(name["valueFrom"], "/preprod/testing/NAME");

    assert_eq!(secret(&secrets, "DB_PASSWORD")["type"], "SecureString");
    assert_eq!(secret(&secrets, "PORT")["type"], "String");
}

#[test]
fn test_generate_keeps_multiline_values() {
    let t = Test::new();
    t.write("cert.env", CERT);

    assert_success(&t.generate("cert.env", "task.json"));

    let secrets = secrets(&t, "task.json");
    let cert = secret(&secrets, "CERT");
    assert_eq!(cert["type"], "SecureString");
    assert_eq!(
        cert["value"],
        "-----BEGIN CERTIFICATE-----\nMIIBszCCAVmgAwIBAgIU\n-----END CERTIFICATE-----"
    );
}

#[test]
fn test_generate_duplicate_key_last_value_wins() {
    let t = Test::new();
    t.write("dup.env", "HOST=a\nOTHER=x\nHOST=b\n");

    assert_success(&t.generate("dup.env", "task.json"));

    let secrets = secrets(&t, "task.json");
    assert_eq!(secrets.len(), 2);
    assert_eq!(secrets[0]["name"], "HOST");
    assert_eq!(secrets[0]["value"], "b");
}

#[test]
fn test_generate_uses_configured_prefix() {
    let t = Test::new();
    t.write(
        "config.json",
        r#"{"parameterPrefix": "/prod/api/", "region": "eu-west-1"}"#,
    );
    t.write("app.env", "HOST=db.local\n");

    assert_success(&t.generate("app.env", "task.json"));

    let secrets = secrets(&t, "task.json");
    assert_eq!(secrets[0]["valueFrom"], "/prod/api/HOST");
}

#[test]
fn test_generate_creates_default_config() {
    let t = Test::new();
    t.write("app.env", "HOST=db.local\n");

    let output = t.generate("app.env", "task.json");
    assert_success(&output);
    assert_stdout_contains(&output, "Generated default config.json");

    let config: Value = serde_json::from_str(&t.read("config.json")).unwrap();
    assert_eq!(config["parameterPrefix"], "/preprod/testing/");
    assert_eq!(config["region"], "ap-southeast-3");
}

#[test]
fn test_generate_single_dash_flags() {
    let t = Test::new();
    t.write("app.env", "HOST=db.local\n");

    let output = t.run(&["-action", "generate", "-s", "app.env", "-o", "task.json"]);
    assert_success(&output);
    assert!(t.path("task.json").exists());
}

#[cfg(unix)]
#[test]
fn test_generate_output_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    t.write("app.env", "HOST=db.local\n");
    assert_success(&t.generate("app.env", "task.json"));

    let mode = std::fs::metadata(t.path("task.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_generate_missing_env_file() {
    let t = Test::new();

    let output = t.generate("missing.env", "task.json");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing.env");
    assert!(!t.path("task.json").exists());
}
