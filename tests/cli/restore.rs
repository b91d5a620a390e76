use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_restore_puts_placeholders_back() -> Result<()> {
    let test = CliTest::with_file("translated.txt", "1|||Nhấn @@0@@ để @@1@@\n")?;
    test.write_file("placeholders_map.json", r#"["[key]", "{action}"]"#)?;

    let (code, stdout, _) = run(test.restore_command().args(["translated.txt", "final.txt"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Restored 2 marker(s)"));
    assert_eq!(test.read_file("final.txt")?, "1|||Nhấn [key] để {action}\n");
    Ok(())
}

#[test]
fn test_restore_leaves_out_of_range_markers() -> Result<()> {
    let test = CliTest::with_file("translated.txt", "keep @@999@@\n")?;
    test.write_file("placeholders_map.json", r#"["a", "b", "c"]"#)?;

    let (code, _, _) = run(test.restore_command().args(["translated.txt", "final.txt"]))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("final.txt")?, "keep @@999@@\n");
    Ok(())
}

#[test]
fn test_restore_with_custom_mapping_path() -> Result<()> {
    let test = CliTest::with_file("translated.txt", "@@0@@\n")?;
    test.write_file("maps/run1.json", r#"["[key]"]"#)?;

    let (code, _, _) = run(test.restore_command().args([
        "translated.txt",
        "final.txt",
        "--mapping",
        "maps/run1.json",
    ]))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("final.txt")?, "[key]\n");
    Ok(())
}

#[test]
fn test_restore_missing_mapping_fails_before_output() -> Result<()> {
    let test = CliTest::with_file("translated.txt", "@@0@@\n")?;

    let (code, _, stderr) = run(test.restore_command().args(["translated.txt", "final.txt"]))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("file not found"));
    assert!(stderr.contains("placeholders_map.json"));
    assert!(!test.has_file("final.txt"));
    Ok(())
}

#[test]
fn test_restore_malformed_mapping_reports_json_error() -> Result<()> {
    let test = CliTest::with_file("translated.txt", "@@0@@\n")?;
    test.write_file("placeholders_map.json", "{ broken")?;

    let (code, _, stderr) = run(test.restore_command().args(["translated.txt", "final.txt"]))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("not valid JSON"));
    assert!(!test.has_file("final.txt"));
    Ok(())
}

#[test]
fn test_restore_missing_translated_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("placeholders_map.json", r#"["a"]"#)?;

    let (code, _, stderr) = run(test.restore_command().args(["absent.txt", "final.txt"]))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("file not found"));
    assert!(stderr.contains("absent.txt"));
    Ok(())
}
