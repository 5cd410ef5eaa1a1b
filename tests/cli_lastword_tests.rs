// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

mod common;

use std::process::Command;

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;

use common::Workspace;

#[inline]
fn lastword(ws: &Workspace) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("lastword"));
    cmd.current_dir(ws.dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_lastword_single_line() {
    let ws = Workspace::with_output("a b c d e FOUND g");

    lastword(&ws)
        .assert()
        .success()
        .stdout("FOUND")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_lastword_multiple_lines() {
    let ws = Workspace::with_output(
        "x1 x2 x3 x4 x5 x6 x7\nalpha beta gamma delta epsilon ZETA eta",
    );

    lastword(&ws).assert().success().stdout("ZETA");
}

#[test]
fn test_lastword_trailing_newline() {
    let ws = Workspace::with_output("one two three four five six\n");

    lastword(&ws).assert().success().stdout("six");
}

#[test]
fn test_lastword_file_not_found() {
    let ws = Workspace::empty();

    lastword(&ws)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Couldn't open file.\n");
}

#[test]
fn test_lastword_idempotent() {
    let ws = Workspace::with_output("1 2 3 4 5 6 7\nq w e r t y u\n");

    let first = lastword(&ws).output().expect("first run");
    let second = lastword(&ws).output().expect("second run");
    assert_eq!(b"y".as_slice(), first.stdout.as_slice());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_lastword_short_line() {
    let ws = Workspace::with_output("a b c d e f g\na b c");

    lastword(&ws)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr("Last line has only 3 words; no word at position 6.\n");
}

#[test]
fn test_lastword_empty_file() {
    let ws = Workspace::with_output("");

    lastword(&ws)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr("File is empty.\n");
}

#[test]
fn test_lastword_explicit_file_and_word() {
    let ws = Workspace::empty();
    let path = ws.write("words.txt", "ignored\nred green blue\n");

    lastword(&ws)
        .arg(&path)
        .arg("--word")
        .arg("2")
        .assert()
        .success()
        .stdout("green");

    lastword(&ws)
        .arg(&path)
        .arg("-w")
        .arg("3")
        .assert()
        .success()
        .stdout("blue");
}

#[test]
fn test_lastword_zero_word_rejected() {
    let ws = Workspace::with_output("a b c d e f");

    lastword(&ws)
        .arg("--word")
        .arg("0")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_lastword_help() {
    let ws = Workspace::empty();

    lastword(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--word"));
}
