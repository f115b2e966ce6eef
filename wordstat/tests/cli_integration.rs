//! Integration tests for wordstat CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn wordstat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wordstat"))
}

fn write_words(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    wordstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordstat"))
        .stdout(predicate::str::contains("words.txt"));
}

#[test]
fn test_cli_version() {
    wordstat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordstat"));
}

#[test]
fn test_full_report() {
    let dir = tempdir().unwrap();
    let path = write_words(dir.path(), "words.txt", "cat\ndog\napple\n\n");

    wordstat().arg(&path).assert().success().stdout(
        "number of words: 3\n\
         longest word: apple\n\
         length of longest word: 5\n\
         shortest word: cat\n\
         length of shortest word: 3\n\
         number of words at length 5 : 1\n\
         number of words at length 4 : 0\n\
         number of words at length 3 : 2\n\
         number of words at length 2 : 0\n\
         number of words at length 1 : 0\n",
    );
}

#[test]
fn test_single_word() {
    let dir = tempdir().unwrap();
    let path = write_words(dir.path(), "one.txt", "hi\n");

    wordstat()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("longest word: hi\n"))
        .stdout(predicate::str::contains("shortest word: hi\n"))
        .stdout(predicate::str::contains("number of words at length 2 : 1\n"))
        .stdout(predicate::str::ends_with("number of words at length 1 : 0\n"));
}

#[test]
fn test_output_is_repeatable() {
    let dir = tempdir().unwrap();
    let path = write_words(dir.path(), "words.txt", "red\ngreen\nblue\nviolet\n");

    let first = wordstat().arg(&path).output().unwrap();
    let second = wordstat().arg(&path).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    wordstat()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn test_blank_file() {
    let dir = tempdir().unwrap();
    let path = write_words(dir.path(), "blank.txt", "\n\n");

    wordstat()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no words found"));
}

#[test]
fn test_logging_stays_off_stdout() {
    let dir = tempdir().unwrap();
    let path = write_words(dir.path(), "words.txt", "a\nbb\n");

    wordstat()
        .env("RUST_LOG", "debug")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("number of words: 2\n"))
        .stderr(predicate::str::contains("loaded 2 words"));
}

#[test]
fn test_default_source_ignores_working_directory() {
    let dir = tempdir().unwrap();
    write_words(dir.path(), "words.txt", "cat\ndog\n");
    let cwd = dir.path().to_string_lossy().to_string();

    wordstat()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("words.txt"))
        .stderr(predicate::str::contains(cwd).not());
}
