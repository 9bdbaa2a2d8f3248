use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn ff_lookup() -> Command {
    let mut cmd = Command::cargo_bin("ff-lookup").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn stderr_of_failure(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(!output.status.success(), "command unexpectedly succeeded");
    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn test_lookup_json() {
    let stdout = stdout_of(ff_lookup().args(["lookup", "12345678", "--json", "--delay-ms", "0"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["player"]["uid"], "12345678");
    assert_eq!(value["player"]["nickname"], "ProGamer_VN");
    assert_eq!(value["guild"]["leader"], "EliteCaptain");
    assert_eq!(value["outfit"]["weapon"], "Dragon AK");
}

#[test]
fn test_lookup_text() {
    let stdout = stdout_of(ff_lookup().args(["lookup", "1234567890", "--delay-ms", "0"]));
    assert!(stdout.contains("ProGamer_VN"));
    assert!(stdout.contains("UID 1234567890"));
    assert!(stdout.contains("Vietnam Elite (#60012345)"));
    assert!(stdout.contains("Skyline Spree"));
}

#[test]
fn test_lookup_not_found() {
    let stderr = stderr_of_failure(ff_lookup().args(["lookup", "99999999", "--delay-ms", "0"]));
    assert!(stderr.contains("No player found for UID 99999999"));
}

#[test]
fn test_lookup_rejects_invalid_uid() {
    let stderr = stderr_of_failure(ff_lookup().args(["lookup", "12ab5678"]));
    assert!(stderr.contains("UID must contain digits only"));

    let stderr = stderr_of_failure(ff_lookup().args(["l", "1234"]));
    assert!(stderr.contains("UID must be at least 8 digits (got 4)"));
}

#[test]
fn test_validate() {
    let stdout = stdout_of(ff_lookup().args(["validate", "10000001"]));
    assert!(stdout.contains("UID looks valid"));

    let stderr = stderr_of_failure(ff_lookup().args(["v", "10000000"]));
    assert!(stderr.contains("UID must be at least 10000001"));
}

#[test]
fn test_config_sets_lookup_delay() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "lookup_delay_ms = 0").unwrap();

    let stdout = stdout_of(ff_lookup().arg("--config").arg(config.path()).args([
        "lookup",
        "12345678",
        "--json",
    ]));
    assert!(stdout.contains("\"nickname\": \"ProGamer_VN\""));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let stderr = stderr_of_failure(
        ff_lookup()
            .arg("--config")
            .arg(&missing)
            .args(["validate", "10000001"]),
    );
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_unknown_config_key_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "colour = \"red\"").unwrap();

    let stderr = stderr_of_failure(
        ff_lookup()
            .arg("--config")
            .arg(config.path())
            .args(["validate", "10000001"]),
    );
    assert!(stderr.contains("Failed to load configuration"));
}
