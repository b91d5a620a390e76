use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_extract_basic_script() -> Result<()> {
    let test = CliTest::with_file(
        "script.rpy",
        "label start:\n    eileen \"Hello, world.\"\n    eileen \"Goodbye.\"\n",
    )?;

    let (code, stdout, _) = run(test.extract_command().args(["script.rpy", "extracted.txt"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Extracted 2 strings from 3 lines"));
    assert_eq!(
        test.read_file("extracted.txt")?,
        "2|||Hello, world.\n3|||Goodbye.\n"
    );
    Ok(())
}

#[test]
fn test_extract_preserves_order_within_a_line() -> Result<()> {
    let test = CliTest::with_file("script.rpy", "show \"A\" with \"B\" and \"C\"\n")?;

    let (code, _, _) = run(test.extract_command().args(["script.rpy", "extracted.txt"]))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("extracted.txt")?, "1|||A\n1|||B\n1|||C\n");
    Ok(())
}

#[test]
fn test_extract_skips_old_lines() -> Result<()> {
    let test = CliTest::with_file(
        "script.rpy",
        "translate vi start_a1b2:\n    old \"Hello.\"\n    new \"Xin chào.\"\n",
    )?;

    let (code, _, _) = run(test.extract_command().args(["script.rpy", "extracted.txt"]))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("extracted.txt")?, "3|||Xin chào.\n");
    Ok(())
}

#[test]
fn test_extract_drops_empty_literals() -> Result<()> {
    let test = CliTest::with_file("script.rpy", "menu \"\":\n    \"Choice\"\n")?;

    let (code, stdout, _) = run(test
        .extract_command()
        .args(["script.rpy", "extracted.txt", "--verbose"]))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("extracted.txt")?, "2|||Choice\n");
    assert!(stdout.contains("1 empty literal(s)"));
    Ok(())
}

#[test]
fn test_extract_warns_on_separator_collision() -> Result<()> {
    let test = CliTest::with_file("script.rpy", "say \"a|||b\"\n")?;

    let (code, stdout, _) = run(test.extract_command().args(["script.rpy", "extracted.txt"]))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("separator-collision"));
    assert!(stdout.contains("1 warning"));
    assert_eq!(test.read_file("extracted.txt")?, "");
    Ok(())
}

#[test]
fn test_extract_missing_input_fails() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.extract_command().args(["absent.rpy", "extracted.txt"]))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("file not found"));
    assert!(stderr.contains("absent.rpy"));
    assert!(!test.has_file("extracted.txt"));
    Ok(())
}

#[test]
fn test_help_without_subcommand() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("import"));
    assert!(stdout.contains("protect"));
    assert!(stdout.contains("restore"));
    Ok(())
}
