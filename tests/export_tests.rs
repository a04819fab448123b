mod common;
use common::{TestEnv, init_db_with_data};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_csv_layout() {
    let env = TestEnv::new("export_csv_layout");
    init_db_with_data(&env);

    let out = env.out("march.csv");

    env.cmd()
        .args([
            "export", "--format", "csv", "--month", "2025-03", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "Work hours summary");
    assert_eq!(lines[1], "Month: March 2025");
    assert_eq!(lines[2], "");
    assert_eq!(
        lines[3],
        "Date;Task;Company;Work h;Leave h;Vacation h;Break;Travel km;Travel h"
    );
    // newest first
    assert_eq!(lines[4], "12/03/2025;Doctor;;;2.00;;0;12.50;");
    assert_eq!(lines[5], "10/03/2025;Coding;ACME;8.00;;;30;;");
    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "Totals;;;8.00;2.00;0.00;;12.50;0.00");
}

#[test]
fn test_export_txt_blocks() {
    let env = TestEnv::new("export_txt_blocks");
    init_db_with_data(&env);

    let out = env.out("march.txt");

    env.cmd()
        .args(["export", "--format", "txt", "--month", "2025-03", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported txt");
    assert!(content.starts_with("Work hours summary - March 2025\n"));
    assert!(content.contains(&"-".repeat(50)));
    assert!(content.contains("Company: ACME"));
    assert!(content.contains("Hours: 08:00 - 16:30 (8:00)"));
    assert!(content.contains("Break: 30 minutes"));
    assert!(content.contains("Travel km: 12.50"));
    assert!(content.contains("Total hours: 10:00"));
    assert!(content.contains("Work h: 8.00"));
    assert!(content.contains("Leave h: 2.00"));
}

#[test]
fn test_export_pdf_document() {
    let env = TestEnv::new("export_pdf_doc");
    init_db_with_data(&env);

    let out = env.out("march.pdf");

    env.cmd()
        .args(["export", "--format", "pdf", "--month", "2025-03", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Helvetica-Bold"));
    assert!(text.contains("WinAnsiEncoding"));
    assert!(text.contains("Work hours summary"));
    assert!(text.contains("Coding"));
}

#[test]
fn test_export_xlsx_workbook() {
    let env = TestEnv::new("export_xlsx_book");
    init_db_with_data(&env);

    let out = env.out("march.xlsx");

    env.cmd()
        .args(["export", "--format", "xlsx", "--month", "2025-03", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_json_summary() {
    let env = TestEnv::new("export_json_summary");
    init_db_with_data(&env);

    let out = env.out("march.json");

    env.cmd()
        .args(["export", "--format", "json", "--month", "2025-03", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["month"]["year"], 2025);
    assert_eq!(v["month"]["month"], 3);
    assert_eq!(v["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["rows"][0]["entry_type"], "leave");
    assert_eq!(v["totals"]["work_hours"], 8.0);
    assert_eq!(v["totals"]["travel_kms"], 12.5);
}

#[test]
fn test_export_empty_month_writes_nothing() {
    let env = TestEnv::new("export_empty_month");
    init_db_with_data(&env);

    let out = env.out("january.csv");

    env.cmd()
        .args(["export", "--format", "csv", "--month", "2024-01", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for January 2024."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_default_path_and_files_listing() {
    let env = TestEnv::new("export_default_path");
    init_db_with_data(&env);

    env.cmd()
        .args(["export", "--format", "csv", "--month", "2025-03"])
        .assert()
        .success();

    let expected = env.export_dir().join("Summary_March_2025.csv");
    assert!(expected.exists(), "missing {}", expected.display());

    env.cmd()
        .arg("files")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Summary_March_2025.csv"));
}

#[test]
fn test_files_open_rejects_unknown_selection() {
    let env = TestEnv::new("files_open_unknown");
    init_db_with_data(&env);

    env.cmd()
        .args(["export", "--format", "txt", "--month", "2025-03"])
        .assert()
        .success();

    env.cmd()
        .args(["files", "--open", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved file number 2"));

    env.cmd()
        .args(["files", "--open", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved file number 0"));

    env.cmd()
        .args(["files", "--open", "Summary_April_2025.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No saved file named 'Summary_April_2025.txt'",
        ));
}

#[test]
fn test_export_preview_conflicts_with_file() {
    let env = TestEnv::new("export_preview_file");
    init_db_with_data(&env);

    let out = env.out("summary.pdf");

    env.cmd()
        .args(["export", "--month", "2025-03", "--preview", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_declined() {
    let env = TestEnv::new("export_declined");
    init_db_with_data(&env);

    let out = env.out("existing.csv");
    fs::write(&out, "keep me").expect("seed file");

    env.cmd()
        .args(["export", "--format", "csv", "--month", "2025-03", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap_or_default(), "keep me");
}

#[test]
fn test_export_invalid_month_fails() {
    let env = TestEnv::new("export_bad_month");
    init_db_with_data(&env);

    env.cmd()
        .args(["export", "--format", "csv", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_export_localized_italian() {
    let env = TestEnv::new("export_italian");
    init_db_with_data(&env);
    env.write_config("language: it\n");

    env.cmd()
        .args(["export", "--format", "csv", "--month", "2025-03"])
        .assert()
        .success();

    let path = env.export_dir().join("Riepilogo_Marzo_2025.csv");
    let content = fs::read_to_string(&path).expect("read italian csv");

    assert!(content.starts_with("Riepilogo ore lavorative\n"));
    assert!(content.contains("Marzo 2025"));
    assert!(content.contains("Totali;;;8,00;2,00;0,00;;12,50;0,00"));
}
