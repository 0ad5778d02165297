//! End-to-end tests of the `u-tsp` binary.

#![allow(deprecated)] // cargo_bin still works, just deprecated for custom build-dir

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn u_tsp() -> Command {
    Command::cargo_bin("u-tsp").expect("u-tsp binary not built")
}

fn write_square(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("square.txt");
    fs::write(&path, "# unit square\n(0, 0)\n(1, 0)\n(1, 1)\n(0, 1)\n").unwrap();
    path
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    u_tsp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("stats"));
}

// ============================================================================
// solve
// ============================================================================

#[test]
fn test_solve_file_all_algorithms() {
    let dir = TempDir::new().unwrap();
    let path = write_square(&dir);

    u_tsp()
        .args(["solve", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 points"))
        .stdout(predicate::str::contains("ppp"))
        .stdout(predicate::str::contains("optppp"))
        .stdout(predicate::str::contains("optprim"))
        .stdout(predicate::str::contains("hds"))
        .stdout(predicate::str::contains("optimal"))
        .stdout(predicate::str::contains("4.000000"));
}

#[test]
fn test_solve_show_cycle() {
    let dir = TempDir::new().unwrap();
    let path = write_square(&dir);

    u_tsp()
        .args(["solve", "-a", "ppp", "--show-cycle", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle: 0 1 2 3"));
}

#[test]
fn test_solve_attach_construction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attach.txt");
    fs::write(&path, "0 0\n0 1\n3 0\n3 1.5\n").unwrap();

    u_tsp()
        .args(["solve", "-a", "ppp", "--attach", "--show-cycle", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle: 0 2 3 1"));
}

#[test]
fn test_solve_sweep_conflicts_with_best_improvement() {
    u_tsp()
        .args(["solve", "-n", "8", "--seed", "1", "--sweep", "--best-improvement"])
        .assert()
        .failure();

    u_tsp()
        .args(["solve", "-n", "8", "--seed", "1", "-a", "optppp", "--sweep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local-optimum"));
}

#[test]
fn test_solve_random_and_save() {
    let dir = TempDir::new().unwrap();
    let saved = dir.path().join("points.txt");

    u_tsp()
        .args(["solve", "-n", "15", "--seed", "7", "-a", "optppp", "-a", "optprim", "--save"])
        .arg(&saved)
        .assert()
        .success()
        .stdout(predicate::str::contains("15 points"))
        .stdout(predicate::str::contains("local-optimum"))
        .stdout(predicate::str::contains("approximate"));

    let text = fs::read_to_string(&saved).unwrap();
    assert_eq!(text.lines().count(), 15);
}

#[test]
fn test_solve_same_seed_same_output_lengths() {
    let run = || {
        let output = u_tsp()
            .args(["solve", "-n", "9", "--seed", "3", "-a", "hds"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .lines()
            .find(|l| l.starts_with("hds"))
            .and_then(|l| l.split_whitespace().nth(2))
            .map(str::to_string)
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_solve_large_n_skips_hds() {
    u_tsp()
        .args(["solve", "-n", "20", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hds skipped"));
}

#[test]
fn test_solve_budget_exceeded() {
    u_tsp()
        .args(["solve", "-n", "12", "--seed", "5", "-a", "hds", "--max-nodes", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("budget-exceeded"));
}

#[test]
fn test_solve_single_point_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.txt");
    fs::write(&path, "(0.5, 0.5)\n").unwrap();

    u_tsp()
        .args(["solve", "--file"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn test_solve_unparsable_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "(0, 0)\nnot a point\n").unwrap();

    u_tsp()
        .args(["solve", "--file"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_solve_start_out_of_range_fails() {
    u_tsp()
        .args(["solve", "-n", "5", "--seed", "1", "--start", "5", "-a", "ppp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_solve_unknown_algorithm_rejected() {
    u_tsp()
        .args(["solve", "-a", "simplex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm"));
}

// ============================================================================
// stats
// ============================================================================

#[test]
fn test_stats_reports_gaps() {
    u_tsp()
        .args(["stats", "-n", "7", "--trials", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n = 7, 4 trials"))
        .stdout(predicate::str::contains("gap optprim to optimum"));
}

#[test]
fn test_stats_scalability() {
    u_tsp()
        .args(["stats", "--trials", "2", "--sizes", "5,15", "-a", "ppp", "-a", "optprim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n = 5, 2 trials"))
        .stdout(predicate::str::contains("n = 15, 2 trials"));
}

#[test]
fn test_stats_zero_trials_fails() {
    u_tsp()
        .args(["stats", "--trials", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("trials"));
}
