mod common;

use common::TestResult;
use common::fixtures::record_json;
use std::fs;
use std::process::Command;

#[test]
fn test_cli_renders_records_with_config() -> TestResult {
    let dir = tempfile::tempdir()?;
    let records = dir.path().join("records.json");
    let config = dir.path().join("config.json");
    let output = dir.path().join("carne.pdf");
    fs::write(&records, serde_json::to_string(&vec![record_json(); 2])?)?;
    fs::write(&config, r#"{ "mode": "carne", "title": "Carnê" }"#)?;

    let status = Command::new(env!("CARGO_BIN_EXE_boleto"))
        .arg(&records)
        .arg(&output)
        .arg(&config)
        .status()?;
    assert!(status.success());

    let pdf = common::GeneratedPdf::from_bytes(fs::read(&output)?)?;
    assert_eq!(pdf.page_count(), 1);
    let (width, height) = pdf.page_size(1)?;
    assert!(width > height);
    Ok(())
}

#[test]
fn test_cli_rejects_missing_arguments() -> TestResult {
    let status = Command::new(env!("CARGO_BIN_EXE_boleto")).status()?;
    assert!(!status.success());
    Ok(())
}

#[test]
fn test_cli_fails_on_malformed_records() -> TestResult {
    let dir = tempfile::tempdir()?;
    let records = dir.path().join("records.json");
    fs::write(&records, r#"[{ "payee_name": "sem campos" }]"#)?;

    let status = Command::new(env!("CARGO_BIN_EXE_boleto"))
        .arg(&records)
        .arg(dir.path().join("out.pdf"))
        .status()?;
    assert!(!status.success());
    Ok(())
}
