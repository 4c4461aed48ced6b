use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, GREETING, stderr, stdout};

#[test]
fn test_extract_csv_catalog() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;

    assert_cmd_snapshot!(test.extract_command().args(["in", "catalog.csv"]));

    assert_eq!(
        test.read_file("catalog.csv")?,
        "file,id,original_string,translated_string\n\
         msg.json,msg.json::greeting:0,Hello,\n\
         msg.json,msg.json::greeting:1,Bye,\n"
    );

    Ok(())
}

#[test]
fn test_extract_csv_uses_forward_slash_paths() -> Result<()> {
    let test = CliTest::with_file("in/dlc/msg.json", GREETING)?;
    test.write_file("in/base.json", r#"{"labelDataArray": []}"#)?;

    assert_cmd_snapshot!(test.extract_command().args(["in", "out/catalog.csv"]));

    let catalog = test.read_file("out/catalog.csv")?;
    assert!(catalog.contains("dlc/msg.json,dlc/msg.json::greeting:0,Hello,"));
    assert_eq!(catalog.lines().count(), 3);

    Ok(())
}

#[test]
fn test_extract_flat_files() -> Result<()> {
    let test = CliTest::with_file("in/dlc/msg.json", GREETING)?;

    assert_cmd_snapshot!(test.extract_command().args(["--format", "flat", "in", "flat"]));

    assert_eq!(
        test.read_file("flat/dlc/msg.json")?,
        "{\n  \"greeting_0\": \"Hello\",\n  \"greeting_1\": \"Bye\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_extract_does_not_modify_input() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;

    test.extract_command()
        .args(["--format", "flat", "in", "flat"])
        .output()?;

    assert_eq!(test.read_file("in/msg.json")?, GREETING);

    Ok(())
}

#[test]
fn test_extract_flat_into_input_root_is_refused() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;

    assert_cmd_snapshot!(test.extract_command().args(["--format", "flat", "in", "in"]));

    assert_eq!(test.read_file("in/msg.json")?, GREETING);

    Ok(())
}

#[test]
fn test_extract_missing_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.extract_command().args(["missing", "catalog.csv"]));

    assert!(!test.exists("catalog.csv"));

    Ok(())
}

#[test]
fn test_extract_parse_error_aborts() -> Result<()> {
    let test = CliTest::with_file("in/a.json", GREETING)?;
    test.write_file("in/b.json", "{ not json")?;

    let output = test
        .extract_command()
        .args(["in", "catalog.csv"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to process b.json"));
    assert!(!test.exists("catalog.csv"));

    Ok(())
}

#[test]
fn test_extract_keep_going_skips_bad_file() -> Result<()> {
    let test = CliTest::with_file("in/a.json", GREETING)?;
    test.write_file("in/b.json", "{ not json")?;

    let output = test
        .extract_command()
        .args(["in", "catalog.csv", "--keep-going"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("1 file failed and was skipped"));
    assert_eq!(test.read_file("catalog.csv")?.lines().count(), 3);

    Ok(())
}
