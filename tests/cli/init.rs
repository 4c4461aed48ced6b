use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, GREETING, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    let content = test.read_file(".wordlocrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["backupSuffix"], ".bak.json");
    assert_eq!(parsed["flatIndent"], 2);
    assert!(parsed.get("inputRoot").is_some());
    assert!(parsed.get("translationsRoot").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".wordlocrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert_eq!(test.read_file(".wordlocrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;

    test.command().arg("init").output()?;

    let output = test
        .extract_command()
        .args(["--format", "flat", "in", "flat"])
        .output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("flat/msg.json").exists());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("extract"));
    assert!(help.contains("apply"));
    assert!(help.contains("init"));

    Ok(())
}
