#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// An isolated config home plus database for one test.
pub struct TestEnv {
    pub home: PathBuf,
    pub db: String,
}

impl TestEnv {
    /// Fresh directory inside the system temp dir; any previous run is wiped.
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("workhours_{name}"));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create test home");

        let db = home.join("test.sqlite").to_string_lossy().to_string();
        Self { home, db }
    }

    /// The binary with `WORKHOURS_HOME` and `--db` pointing at this env.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("workhours");
        cmd.env("WORKHOURS_HOME", &self.home);
        cmd.args(["--db", &self.db]);
        cmd
    }

    /// `init` in test mode: schema only, no config file written.
    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn add(&self, args: &[&str]) {
        self.cmd().arg("add").args(args).assert().success();
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.home.join("workhours.conf"), yaml).expect("write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.home.join("workhours.conf")).unwrap_or_default()
    }

    pub fn export_dir(&self) -> PathBuf {
        self.home.join("exports")
    }

    /// Output path inside the test home.
    pub fn out(&self, name: &str) -> String {
        self.home.join(name).to_string_lossy().to_string()
    }
}

/// Two March 2025 entries: 8h of work and a 2h leave with travel.
pub fn init_db_with_data(env: &TestEnv) {
    env.init();

    env.add(&[
        "--date",
        "2025-03-10",
        "--start",
        "08:00",
        "--end",
        "16:30",
        "--break",
        "30",
        "--task",
        "Coding",
        "--company",
        "ACME",
    ]);

    env.add(&[
        "--date",
        "2025-03-12",
        "--start",
        "09:00",
        "--end",
        "11:00",
        "--type",
        "leave",
        "--task",
        "Doctor",
        "--kms",
        "12.5",
    ]);
}
