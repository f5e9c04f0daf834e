#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn entry_score(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("entry-score").expect("binary should compile");
    cmd.current_dir(dir.path()).env("HOME", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn perfect_args() -> Vec<&'static str> {
    vec![
        "calc",
        "--hours",
        "60",
        "--colloquium",
        "10",
        "10",
        "10",
        "--seminar",
        "10",
        "10",
        "10",
        "--independent",
        "10",
    ]
}

#[test]
fn calc_perfect_scores_total_thirty() {
    let dir = TempDir::new().expect("temp dir should be created");
    entry_score(&dir)
        .args(perfect_args())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("colloquium:    6.00 (average 10.00)"))
        .stdout(predicate::str::contains("seminar:       4.00 (average 10.00)"))
        .stdout(predicate::str::contains("entry score:  30.00 / 50"));
}

#[test]
fn calc_ten_point_scale_divides_total() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut args = perfect_args();
    args.extend(["--scale", "10"]);
    entry_score(&dir)
        .args(args)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("entry score:   6.00 / 10"));
}

#[test]
fn calc_attendance_penalty_at_sixty_hours() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut args = perfect_args();
    args.extend(["--absences", "10"]);
    entry_score(&dir)
        .args(args)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("attendance:    6.70"));
}

#[test]
fn calc_attendance_floors_at_zero() {
    let dir = TempDir::new().expect("temp dir should be created");
    entry_score(&dir)
        .args([
            "calc",
            "--hours",
            "30",
            "--colloquium",
            "5",
            "5",
            "5",
            "--seminar",
            "5",
            "--independent",
            "5",
            "--absences",
            "25",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("attendance:    0.00"));
}

#[test]
fn calc_json_output_serializes_result() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut args = perfect_args();
    args.extend(["--format", "json"]);
    entry_score(&dir)
        .args(args)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"total_score\": 30.0"))
        .stdout(predicate::str::contains("\"result_scale\": 50"));
}

#[test]
fn calc_reports_every_invalid_field() {
    let dir = TempDir::new().expect("temp dir should be created");
    entry_score(&dir)
        .args([
            "calc",
            "--hours",
            "50",
            "--colloquium",
            "11",
            "8",
            "-1",
            "--seminar",
            "x",
            "--independent",
            "7",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: course_hours:"))
        .stderr(predicate::str::contains("error: colloquium[1]: must be between 0 and 10"))
        .stderr(predicate::str::contains("error: colloquium[3]: must be between 0 and 10"))
        .stderr(predicate::str::contains("error: seminar[1]: 'x' is not a number"));
}

#[test]
fn calc_uses_output_defaults_from_project_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("entry-score.toml"),
        r#"
[output]
format = "md"
scale = 10
"#,
    )
    .expect("project config should write");

    entry_score(&dir)
        .args(perfect_args())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Exam Entry Score"))
        .stdout(predicate::str::contains("**Entry score:** 6.00 / 10"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut args = vec!["--config", "missing.toml"];
    args.extend(perfect_args());
    entry_score(&dir)
        .args(args)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_policy_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("entry-score.toml"),
        "[policy]\ncolloquium_weight = 0.9\n",
    )
    .expect("project config should write");

    entry_score(&dir)
        .args(perfect_args())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn policy_prints_effective_values() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(dir.path().join(".entry-score")).expect("local dir should create");
    fs::write(
        dir.path().join(".entry-score/local.toml"),
        "[policy]\npenalty_low_hours = 0.25\n",
    )
    .expect("local config should write");

    entry_score(&dir)
        .arg("policy")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[policy]"))
        .stdout(predicate::str::contains("penalty_low_hours = 0.25"))
        .stdout(predicate::str::contains("penalty_high_hours = 0.33"));
}

#[test]
fn prompt_session_reads_from_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");
    entry_score(&dir)
        .arg("prompt")
        .write_stdin("4\n10\n10\n10\n1\n10\n10\n0\n10\nn\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("entry score:   6.00 / 10"))
        .stdout(predicate::str::contains("goodbye"));
}

#[test]
fn prompt_session_fails_when_input_closes() {
    let dir = TempDir::new().expect("temp dir should be created");
    entry_score(&dir)
        .arg("prompt")
        .write_stdin("4\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input closed"));
}
