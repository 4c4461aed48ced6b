use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, GREETING, stderr, word_text};

#[test]
fn test_apply_csv_to_output() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;
    test.write_file(
        "catalog.csv",
        "file,id,original_string,translated_string\n\
         msg.json,msg.json::greeting:0,Hello,Hola\n\
         msg.json,msg.json::greeting:1,Bye,\n",
    )?;

    assert_cmd_snapshot!(test.apply_command().args(["in", "catalog.csv", "-o", "out"]));

    let merged = test.read_json("out/msg.json")?;
    assert_eq!(word_text(&merged, 0), "Hola");
    assert_eq!(word_text(&merged, 1), "Bye");
    assert_eq!(
        merged["labelDataArray"][0]["wordDataArray"][0]["strWidth"],
        serde_json::json!(40.5)
    );

    // Nested output defaults to 4-space indent for catalogs
    assert!(test.read_file("out/msg.json")?.starts_with("{\n    \"labelDataArray\""));
    assert_eq!(test.read_file("in/msg.json")?, GREETING);

    Ok(())
}

#[test]
fn test_apply_csv_requires_output() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;
    test.write_file("catalog.csv", "file,id,original_string,translated_string\n")?;

    assert_cmd_snapshot!(test.apply_command().args(["in", "catalog.csv"]));

    Ok(())
}

#[test]
fn test_apply_csv_copies_untranslated_files() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;
    test.write_file("in/other.json", "{\"labelDataArray\":[]}")?;
    test.write_file(
        "catalog.csv",
        "file,id,original_string,translated_string\n\
         msg.json,msg.json::greeting:1,Bye,Adios\n",
    )?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["in", "catalog.csv", "--output", "out"])
    );

    assert_eq!(test.read_file("out/other.json")?, "{\"labelDataArray\":[]}");
    assert_eq!(word_text(&test.read_json("out/msg.json")?, 1), "Adios");

    Ok(())
}

#[test]
fn test_apply_to_input_root_is_refused() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;
    test.write_file("in/other.json", "{\"labelDataArray\":[]}")?;
    test.write_file("tr/msg.json", r#"{"greeting_0": "Hallo"}"#)?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["--format", "flat", "in", "tr", "-o", "./in"])
    );

    assert_eq!(test.read_file("in/msg.json")?, GREETING);
    assert_eq!(test.read_file("in/other.json")?, "{\"labelDataArray\":[]}");
    assert!(!test.exists("in/msg.json.bak.json"));

    Ok(())
}

#[test]
fn test_apply_flat_to_output() -> Result<()> {
    let test = CliTest::with_file("in/dlc/msg.json", GREETING)?;
    test.write_file(
        "tr/dlc/msg.json",
        r#"{"greeting_0": "Bonjour", "greeting_1": "  "}"#,
    )?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["--format", "flat", "in", "tr", "-o", "out"])
    );

    let merged = test.read_json("out/dlc/msg.json")?;
    assert_eq!(word_text(&merged, 0), "Bonjour");
    assert_eq!(word_text(&merged, 1), "Bye");
    assert!(test.read_file("out/dlc/msg.json")?.starts_with("{\n  \"labelDataArray\""));

    Ok(())
}

#[test]
fn test_apply_flat_warns_on_missing_translation_file() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;
    test.write_file("tr/.keep", "")?;

    let output = test
        .apply_command()
        .args(["--format", "flat", "in", "tr", "-o", "out"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(stderr(&output).contains("No translations found for"));
    assert_eq!(test.read_file("out/msg.json")?, GREETING);

    Ok(())
}

#[test]
fn test_apply_flat_missing_translations_root() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["--format", "flat", "in", "missing", "-o", "out"])
    );

    Ok(())
}

#[test]
fn test_apply_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("in/msg.json", GREETING)?;
    test.write_file("tr/msg.json", r#"{"greeting_0": "Hallo"}"#)?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["--format", "flat", "in", "tr", "--dry-run"])
    );

    assert_eq!(test.read_file("in/msg.json")?, GREETING);
    assert!(!test.exists("in/msg.json.bak.json"));

    Ok(())
}

#[test]
fn test_apply_roots_from_config() -> Result<()> {
    let test = CliTest::with_file("game/msg.json", GREETING)?;
    test.write_file("flat/msg.json", r#"{"greeting_1": "Ciao"}"#)?;
    test.write_file(
        ".wordlocrc.json",
        r#"{"inputRoot": "game", "translationsRoot": "flat"}"#,
    )?;

    assert_cmd_snapshot!(test.apply_command().args(["--format", "flat", "-o", "out"]));

    assert_eq!(word_text(&test.read_json("out/msg.json")?, 1), "Ciao");

    Ok(())
}

#[test]
fn test_apply_missing_roots_without_terminal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.apply_command().args(["--format", "flat", "-o", "out"]));

    Ok(())
}
