// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.
//
// End-to-end runs of the fixture binaries.

use std::process::{Command, Output};

use pta_fixtures::indirect;

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("FIXTURE_LOG")
        .output()
        .expect("failed to spawn fixture")
}

#[test]
fn class_fixture_output() {
    let output = run(env!("CARGO_BIN_EXE_cpplang"), &[]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"A::A\nA::f\n5A::~A\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn class_fixture_rejects_arguments() {
    let output = run(env!("CARGO_BIN_EXE_cpplang"), &["--seed", "1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn indirect_fixture_output_shape() {
    let output = run(env!("CARGO_BIN_EXE_indirect"), &[]);
    assert!(output.status.success());
    assert!(output.stdout == b"a\nc\n" || output.stdout == b"b\nc\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn indirect_fixture_forced_even_draw() {
    let seed = (0..1000).find(|&s| indirect::first_index(s) == 0).unwrap();
    let output = run(env!("CARGO_BIN_EXE_indirect"), &["--seed", &seed.to_string()]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"a\nc\n");
}

#[test]
fn indirect_fixture_forced_odd_draw() {
    let seed = (0..1000).find(|&s| indirect::first_index(s) == 1).unwrap();
    let output = run(env!("CARGO_BIN_EXE_indirect"), &["--seed", &seed.to_string()]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"b\nc\n");
}

#[test]
fn indirect_fixture_accepts_negative_seed() {
    let output = run(env!("CARGO_BIN_EXE_indirect"), &["--seed", "-1"]);
    assert!(output.status.success());
    let expected: &[u8] = if indirect::first_index(-1) == 0 { b"a\nc\n" } else { b"b\nc\n" };
    assert_eq!(output.stdout, expected);
}

#[test]
fn version_and_help_exit_cleanly() {
    let output = run(env!("CARGO_BIN_EXE_cpplang"), &["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "cpplang 0.1.0");

    let output = run(env!("CARGO_BIN_EXE_indirect"), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("--seed"));
}

#[test]
fn bad_command_lines_exit_with_usage_code() {
    for args in [&["x"][..], &["--seed", "1"]] {
        let output = run(env!("CARGO_BIN_EXE_cpplang"), args);
        assert_eq!(output.status.code(), Some(2), "cpplang {args:?}");
        assert!(output.stdout.is_empty());
    }
    for args in [&["--seed", "abc"][..], &["--bogus"], &["--seed"]] {
        let output = run(env!("CARGO_BIN_EXE_indirect"), args);
        assert_eq!(output.status.code(), Some(2), "indirect {args:?}");
        assert!(output.stdout.is_empty());
    }
}

#[cfg(target_os = "linux")]
#[test]
fn failed_stdout_write_exits_with_one() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    for (bin, args) in [
        (env!("CARGO_BIN_EXE_cpplang"), &[][..]),
        (env!("CARGO_BIN_EXE_indirect"), &["--seed", "7"][..]),
    ] {
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let output = Command::new(bin)
            .args(args)
            .env_remove("FIXTURE_LOG")
            .stdout(Stdio::from(full))
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1), "{bin}");
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("failed to write"), "{bin}: {stderr}");
    }
}

#[test]
fn fixture_log_only_affects_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpplang"))
        .env("FIXTURE_LOG", "debug")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"A::A\nA::f\n5A::~A\n");
    assert!(!output.stderr.is_empty());
}
