//! CLI smoke tests against a temporary profile file.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const PROFILES: &str = r#"{
    "normal": {
        "spending_per_day": {"Monday": 5, "Saturday": 2},
        "amount_ranges": {
            "Transport": {"min": 2.0, "max": 6.0},
            "Food": {"min": 8.0, "max": 30.0}
        }
    }
}"#;

fn profiles_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(PROFILES.as_bytes()).expect("write profiles");
    file
}

#[test]
fn renders_the_weekly_heatmap() {
    let profiles = profiles_file();
    Command::cargo_bin("spending_core_cli")
        .expect("binary exists")
        .args(["--profiles"])
        .arg(profiles.path())
        .args(["--profile", "normal", "--seed", "42", "--start", "2025-03-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Sunday"))
        .stdout(predicate::str::contains("week total:"));
}

#[test]
fn unknown_profile_fails_loudly() {
    let profiles = profiles_file();
    Command::cargo_bin("spending_core_cli")
        .expect("binary exists")
        .args(["--profiles"])
        .arg(profiles.path())
        .args(["--profile", "lavish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`lavish` not found"));
}

#[test]
fn missing_profile_file_fails_loudly() {
    Command::cargo_bin("spending_core_cli")
        .expect("binary exists")
        .args(["--profiles", "does-not-exist.json"])
        .assert()
        .failure()
        .code(predicate::eq(1));
}

#[test]
fn rejects_unknown_flags() {
    Command::cargo_bin("spending_core_cli")
        .expect("binary exists")
        .args(["--nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown argument"));
}
