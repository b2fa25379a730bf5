use std::error::Error;
use std::io::Write;

use courseflow::config::{PipelineConfig, load_and_validate, validate_config};

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn full_config_loads_and_validates() -> TestResult {
    let file = write_config(
        r#"
[generation]
default_teaching_style = "feynman"

[notes]
max_notes = 3

[notification]
enabled = false
"#,
    )?;

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.generation.default_teaching_style, "feynman");
    assert_eq!(cfg.notes.max_notes, 3);
    assert!(!cfg.notification.enabled);
    Ok(())
}

#[test]
fn empty_config_falls_back_to_defaults() -> TestResult {
    let file = write_config("")?;

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.generation.default_teaching_style, "general");
    assert_eq!(cfg.notes.max_notes, 10);
    assert!(cfg.notification.enabled);
    Ok(())
}

#[test]
fn unknown_teaching_style_is_rejected() -> TestResult {
    let file = write_config(
        r#"
[generation]
default_teaching_style = "socratic"
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("default_teaching_style"));
    Ok(())
}

#[test]
fn zero_max_notes_is_rejected() -> TestResult {
    let file = write_config(
        r#"
[notes]
max_notes = 0
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("max_notes"));
    Ok(())
}

#[test]
fn default_config_is_valid() {
    validate_config(&PipelineConfig::default()).expect("defaults validate");
}

#[test]
fn missing_file_reports_its_path() {
    let err = load_and_validate("/definitely/not/here/courseflow.toml").unwrap_err();
    assert!(format!("{err:#}").contains("courseflow.toml"));
}
