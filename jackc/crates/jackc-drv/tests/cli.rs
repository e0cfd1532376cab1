//! CLI end-to-end tests: exercises the built `jackc` binary, not the
//! library directly, so flag parsing and file I/O are covered too.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn jackc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jackc"))
}

#[test]
fn help_output_mentions_usage() {
    Command::new(jackc_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_output_mentions_binary_name() {
    Command::new(jackc_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jackc"));
}

#[test]
fn compiling_a_single_file_writes_vm_output() {
    let dir = TempDir::new().unwrap();
    let jack = dir.path().join("Main.jack");
    std::fs::copy(fixtures_dir().join("Main.jack"), &jack).unwrap();

    Command::new(jackc_bin()).arg(&jack).assert().success();

    let vm = std::fs::read_to_string(dir.path().join("Main_.vm")).unwrap();
    assert!(vm.starts_with("function Main.main 0\n"));
    assert!(vm.contains("call Output.printInt 1"));
}

#[test]
fn xml_flag_emits_a_debug_trace_alongside_the_vm_file() {
    let dir = TempDir::new().unwrap();
    let jack = dir.path().join("Main.jack");
    std::fs::copy(fixtures_dir().join("Main.jack"), &jack).unwrap();

    Command::new(jackc_bin()).arg(&jack).arg("--xml").assert().success();

    assert!(dir.path().join("Main_.vm").exists());
    let xml = std::fs::read_to_string(dir.path().join("Main_.xml")).unwrap();
    assert!(xml.starts_with("<tokens>"));
    assert!(xml.contains("<keyword> class </keyword>"));
}

#[test]
fn compiling_a_directory_processes_every_jack_file_non_recursively() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(fixtures_dir().join("Main.jack"), dir.path().join("Main.jack")).unwrap();
    std::fs::write(dir.path().join("Other.jack"), "class Other { function void f() { return; } }")
        .unwrap();

    Command::new(jackc_bin()).arg(dir.path()).assert().success();

    assert!(dir.path().join("Main_.vm").exists());
    assert!(dir.path().join("Other_.vm").exists());
}

#[test]
fn a_syntax_error_produces_a_nonzero_exit_code() {
    let dir = TempDir::new().unwrap();
    let jack = dir.path().join("Broken.jack");
    std::fs::copy(fixtures_dir().join("Broken.jack"), &jack).unwrap();

    Command::new(jackc_bin())
        .arg(&jack)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn directory_mode_aborts_the_whole_run_at_the_first_failure() {
    let dir = TempDir::new().unwrap();
    // "Broken.jack" sorts before "Main.jack", so discovery reaches it first.
    std::fs::copy(fixtures_dir().join("Main.jack"), dir.path().join("Main.jack")).unwrap();
    std::fs::copy(fixtures_dir().join("Broken.jack"), dir.path().join("Broken.jack")).unwrap();

    Command::new(jackc_bin()).arg(dir.path()).assert().failure();

    assert!(!dir.path().join("Main_.vm").exists());
}

#[test]
fn missing_path_is_a_usage_error() {
    Command::new(jackc_bin()).arg("/no/such/path.jack").assert().failure();
}
