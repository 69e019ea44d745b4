//! Snapshot tests for CLI output
//!
//! Each test parses a real command line, runs it against an in-memory sink and
//! snapshots what would have been printed.
//!
//! Run with: `cargo test --test cli_snapshot_tests`
//! Review changes: `cargo insta review`

use bracefmt::cli::{Cli, execute};
use clap::Parser;

/// Run a command line and return stdout (trailing newline trimmed, tabs made visible)
fn run_cli(argv: &[&str]) -> String {
    let cli = Cli::try_parse_from(argv).expect("argument parsing failed");
    let mut out = Vec::new();
    execute(cli, &mut out).expect("command failed");
    String::from_utf8(out)
        .expect("output is not UTF-8")
        .trim_end()
        .replace('\t', " => ")
}

#[test]
fn test_render_inline_snapshot() {
    let output = run_cli(&["bracefmt", "render", "{0} owes {1} {2}, {0}!", "Ada", "3", "coins"]);
    insta::assert_snapshot!(output, @"Ada owes 3 coins, Ada!");
}

#[test]
fn test_render_leaves_unfilled_tokens() {
    let output = run_cli(&["bracefmt", "render", "{0} {1} {2}", "only"]);
    insta::assert_snapshot!(output, @"only {1} {2}");
}

#[test]
fn test_render_file_template_snapshot() {
    let output = run_cli(&[
        "bracefmt",
        "render",
        "--file",
        "tests/fixtures/templates/order_notice.txt",
        "Grace",
        "#1906",
        "Monday",
    ]);
    insta::assert_snapshot!(output, @r"
    Dear Grace,

    Your order #1906 ships on Monday.
    Reference: {3}
    ");
}

#[test]
fn test_render_file_template_modes() {
    let path = "tests/fixtures/templates/rescan.txt";
    let single_pass = run_cli(&["bracefmt", "render", "-f", path, "{1}", "x"]);
    let sequential = run_cli(&["bracefmt", "render", "--sequential", "-f", path, "{1}", "x"]);
    insta::assert_snapshot!(single_pass, @"{1}x");
    insta::assert_snapshot!(sequential, @"xx");
}

#[test]
fn test_scan_snapshot() {
    let output = run_cli(&["bracefmt", "scan", "héllo {0}, {{1}} {00} {12}"]);
    insta::assert_snapshot!(output, @r"
    0 => 7..10
    1 => 13..16
    12 => 23..27
    ");
}

#[test]
fn test_scan_file_snapshot() {
    let output = run_cli(&["bracefmt", "scan", "--file", "tests/fixtures/templates/order_notice.txt"]);
    insta::assert_snapshot!(output, @r"
    0 => 5..8
    1 => 22..25
    2 => 35..38
    3 => 51..54
    ");
}
