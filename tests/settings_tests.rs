mod common;
use common::{TestEnv, init_db_with_data};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_writes_config_and_export_dir() {
    let env = TestEnv::new("init_config");

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    let config = env.read_config();
    assert!(config.contains("database:"));
    assert!(config.contains(&env.db));
    assert!(env.export_dir().is_dir());
}

#[test]
fn test_init_test_mode_keeps_config_untouched() {
    let env = TestEnv::new("init_test_mode");
    env.init();

    assert!(!env.home.join("workhours.conf").exists());
    assert!(std::path::Path::new(&env.db).exists());
}

#[test]
fn test_config_check_and_migrate() {
    let env = TestEnv::new("config_migrate");
    env.write_config("language: en\ncustom_key: kept\n");

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing fields"))
        .stdout(predicate::str::contains("reminder_day"));

    env.cmd().args(["config", "--migrate"]).assert().success();

    let config = env.read_config();
    assert!(config.contains("reminder_day: 25"));
    assert!(config.contains("language: en"));
    assert!(config.contains("custom_key: kept"));

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is complete."));
}

#[test]
fn test_config_print_shows_db_override() {
    let env = TestEnv::new("config_print");

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env.db.as_str()))
        .stdout(predicate::str::contains("reminder_day: 25"));
}

#[test]
fn test_theme_updates_config() {
    let env = TestEnv::new("theme_update");

    env.cmd()
        .args(["theme", "--text-color", "#ff0000", "--text-size", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme updated."));

    let config = env.read_config();
    assert!(config.contains("#FF0000"));
    assert!(config.contains("text_size: 16"));

    env.cmd()
        .args(["theme", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#FF0000"))
        .stdout(predicate::str::contains("16"));
}

#[test]
fn test_theme_gradient_then_reset() {
    let env = TestEnv::new("theme_gradient");

    env.cmd()
        .args(["theme", "--bg-gradient", "gradient_3"])
        .assert()
        .success();
    assert!(env.read_config().contains("gradient_3"));

    env.cmd()
        .args(["theme", "--reset-background", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#FFFFFF"));

    let config = env.read_config();
    assert!(config.contains("#FFFFFF"));
    assert!(!config.contains("gradient_3"));
}

#[test]
fn test_theme_rejects_bad_values() {
    let env = TestEnv::new("theme_bad_values");

    env.cmd()
        .args(["theme", "--text-size", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 12 and 24"));

    env.cmd()
        .args(["theme", "--bg-color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color"));

    env.cmd()
        .args(["theme", "--bg-gradient", "gradient_99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown background gradient"));
}

#[test]
fn test_lang_set_builtin_and_already_active() {
    let env = TestEnv::new("lang_set");

    env.cmd()
        .args(["lang", "--set", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("English is already the active language."));

    env.cmd()
        .args(["lang", "--set", "it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lingua impostata su Italiano."));

    assert!(env.read_config().contains("language: it"));
}

#[test]
fn test_lang_set_not_installed_fails() {
    let env = TestEnv::new("lang_not_installed");

    env.cmd()
        .args(["lang", "--set", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"))
        .stderr(predicate::str::contains("lang --download de"));
}

#[test]
fn test_lang_list_shows_states() {
    let env = TestEnv::new("lang_list");

    env.cmd()
        .args(["lang", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("active"))
        .stdout(predicate::str::contains("Deutsch"))
        .stdout(predicate::str::contains("available for download"));
}

#[test]
fn test_lang_download_from_local_dir() {
    let env = TestEnv::new("lang_download");
    init_db_with_data(&env);

    let packs = env.home.join("packs");
    fs::create_dir_all(&packs).expect("create packs dir");

    let en = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/src/i18n/en.json"))
        .expect("read en.json");
    let de = en
        .replace("\"Work hours summary\"", "\"Arbeitszeitübersicht\"")
        .replace("\"English\"", "\"Deutsch\"");
    fs::write(packs.join("de.json"), de).expect("write de pack");

    env.write_config(&format!("lang_pack_url: {}\n", packs.display()));

    env.cmd()
        .args(["lang", "--download", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language pack Deutsch installed."));

    assert!(env.home.join("lang").join("de.json").is_file());
    assert!(env.read_config().contains("language: de"));

    let out = env.out("de.csv");
    env.cmd()
        .args(["export", "--format", "csv", "--month", "2025-03", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("Arbeitszeitübersicht\n"));
}

#[test]
fn test_lang_download_without_url_fails() {
    let env = TestEnv::new("lang_download_no_url");

    env.cmd()
        .args(["lang", "--download", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lang_pack_url"));
}

#[test]
fn test_lang_download_rejects_invalid_pack() {
    let env = TestEnv::new("lang_download_invalid");

    let packs = env.home.join("packs");
    fs::create_dir_all(&packs).expect("create packs dir");
    fs::write(packs.join("es.json"), r#"{ "month_1": "Enero" }"#).expect("write pack");
    env.write_config(&format!("lang_pack_url: {}\n", packs.display()));

    env.cmd()
        .args(["lang", "--download", "es"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing key"));

    assert!(!env.home.join("lang").join("es.json").exists());
}

#[test]
fn test_update_reports_newer_version() {
    let env = TestEnv::new("update_newer");

    let manifest = env.home.join("latest.json");
    fs::write(
        &manifest,
        r#"{ "version": "99.0.0", "url": "https://example.com/release", "notes": "Faster exports" }"#,
    )
    .expect("write manifest");
    env.write_config(&format!("update_url: {}\n", manifest.display()));

    env.cmd()
        .args(["update", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A new version is available: 99.0.0"))
        .stdout(predicate::str::contains("Faster exports"))
        .stdout(predicate::str::contains("https://example.com/release"));
}

#[test]
fn test_update_up_to_date_with_github_tag() {
    let env = TestEnv::new("update_current");

    let manifest = env.home.join("latest.json");
    fs::write(&manifest, r#"{ "tag_name": "v0.0.1" }"#).expect("write manifest");
    env.write_config(&format!("update_url: {}\n", manifest.display()));

    env.cmd()
        .args(["update", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are running the latest version"));
}

#[test]
fn test_update_without_url_fails() {
    let env = TestEnv::new("update_no_url");

    env.cmd()
        .args(["update", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("update_url"));
}

#[test]
fn test_info_shows_paths() {
    let env = TestEnv::new("info_paths");

    env.cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains(env.db.as_str()))
        .stdout(predicate::str::contains("workhours.conf"))
        .stdout(predicate::str::contains("English (en)"));
}

#[test]
fn test_lang_set_and_download_are_exclusive() {
    let env = TestEnv::new("lang_set_download");

    env.cmd()
        .args(["lang", "--set", "it", "--download", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(!env.read_config().contains("language: it"));
}

/// Name and uncompressed size of the single entry of a backup archive.
fn zipped_entry(path: &std::path::Path) -> (String, u64) {
    let file = fs::File::open(path).expect("open archive");
    let mut archive = zip::ZipArchive::new(file).expect("read archive");
    assert_eq!(archive.len(), 1);
    let entry = archive.by_index(0).expect("first entry");
    (entry.name().to_string(), entry.size())
}

#[test]
fn test_backup_compressed() {
    let env = TestEnv::new("backup_zip");
    init_db_with_data(&env);

    let dest = env.out("backup.sqlite");
    let db_len = fs::metadata(&env.db).expect("db metadata").len();

    env.cmd()
        .args(["backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    let zip_path = env.home.join("backup.zip");
    assert!(zip_path.is_file());
    assert!(!env.home.join("backup.sqlite").exists());

    let (name, size) = zipped_entry(&zip_path);
    assert_eq!(name, "test.sqlite");
    assert_eq!(size, db_len);
}

#[test]
fn test_backup_compressed_to_zip_name_keeps_database() {
    let env = TestEnv::new("backup_zip_name");
    init_db_with_data(&env);

    let dest = env.out("mydb.zip");
    let db_len = fs::metadata(&env.db).expect("db metadata").len();

    env.cmd()
        .args(["backup", "--file", &dest, "--compress"])
        .assert()
        .success();

    let (_, size) = zipped_entry(std::path::Path::new(&dest));
    assert!(db_len > 0);
    assert_eq!(size, db_len);
}

#[test]
fn test_backup_compressed_leaves_existing_file_alone() {
    let env = TestEnv::new("backup_zip_keeps_file");
    init_db_with_data(&env);

    let notes = env.out("notes.txt");
    fs::write(&notes, "keep me").expect("write notes");

    env.cmd()
        .args(["backup", "--file", &notes, "--compress"])
        .write_stdin("n\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&notes).expect("read notes"), "keep me");
    assert!(env.home.join("notes.zip").is_file());
}

#[test]
fn test_backup_declined_overwrite_keeps_file() {
    let env = TestEnv::new("backup_overwrite_no");
    init_db_with_data(&env);

    let dest = env.out("copy.sqlite");
    fs::write(&dest, "old backup").expect("write old backup");

    env.cmd()
        .args(["backup", "--file", &dest])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Backup cancelled"));

    assert_eq!(fs::read_to_string(&dest).expect("read backup"), "old backup");
}

#[test]
fn test_backup_confirmed_overwrite_replaces_file() {
    let env = TestEnv::new("backup_overwrite_yes");
    init_db_with_data(&env);

    let dest = env.out("copy.sqlite");
    fs::write(&dest, "old backup").expect("write old backup");
    let db_len = fs::metadata(&env.db).expect("db metadata").len();

    env.cmd()
        .args(["backup", "--file", &dest])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    assert_eq!(fs::metadata(&dest).expect("backup metadata").len(), db_len);
}
