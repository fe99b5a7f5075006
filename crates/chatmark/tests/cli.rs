//! Integration tests for the chatmark command line.
//!
//! Commands are parsed with clap and run against in-memory stdin/stdout, so
//! no process is spawned.

use std::fs;

use chatmark::cli::{run, Cli};
use clap::Parser;
use insta::assert_snapshot;

fn run_cli(args: &[&str], stdin: &str) -> String {
    let cli = Cli::try_parse_from(std::iter::once("chatmark").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    run(cli, stdin.as_bytes(), &mut out).expect("command should succeed");
    String::from_utf8(out).expect("output is UTF-8").trim_end().to_string()
}

#[test]
fn text_output_uses_section_signs() {
    let out = run_cli(&["render", "&aHi {name}!", "--var", "name=Steve"], "");
    assert_snapshot!(out, @"§aHi Steve!");
}

#[test]
fn unbound_names_keep_placeholders() {
    let out = run_cli(&["render", "{who} ran {cmd(a,b)}"], "");
    assert_snapshot!(out, @"{who} ran {cmd(a,b)}");
}

#[test]
fn template_from_stdin() {
    let out = run_cli(&["render", "--output", "plain"], "&c&lAlert:&r {upper(done)}\n");
    assert_snapshot!(out, @"Alert: DONE");
}

#[test]
fn legacy_output_from_segments() {
    let out = run_cli(&["render", "&6Gold &lbold&r plain", "-o", "legacy"], "");
    assert_snapshot!(out, @"§6Gold §6§lbold§r plain");
}

#[test]
fn json_output() {
    let out = run_cli(
        &["render", "&a{name} {command(\"[tp]\",/tp)}", "--var", "name=Alex", "-o", "json"],
        "",
    );
    assert_snapshot!(out, @r#"
    {
      "text": "",
      "extra": [
        {
          "text": "Alex",
          "color": "green"
        },
        {
          "text": " ",
          "color": "green"
        },
        {
          "text": "[tp]",
          "color": "green",
          "clickEvent": {
            "action": "run_command",
            "value": "/tp"
          }
        }
      ]
    }
    "#);
}

#[test]
fn term_output_without_color() {
    let out = run_cli(&["render", "&cred #00ff00green", "-o", "term", "--color", "never"], "");
    assert_snapshot!(out, @"red green");
}

#[test]
fn term_output_with_color() {
    let out = run_cli(&["render", "&cred", "-o", "term", "--color", "always"], "");
    assert_eq!(out, "\x1b[38;5;9mred\x1b[0m");
}

#[test]
fn tokens_output() {
    let out = run_cli(&["render", "aaa{a{a}a}#abcxyz", "-o", "tokens"], "");
    assert_snapshot!(out, @r#"
    Text("aaa")
    Variable("a{a}a")
    HexColor("aabbcc")
    Text("xyz")
    "#);
}

#[test]
fn template_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("motd.txt");
    fs::write(&path, "&bWelcome to {server}").unwrap();

    let out = run_cli(
        &["render", "--file", path.to_str().unwrap(), "--var", "server=Lobby"],
        "",
    );
    assert_snapshot!(out, @"§bWelcome to Lobby");
}

#[test]
fn yaml_vars_file_flattens_nested_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vars.yaml");
    fs::write(&path, "player:\n  name: Steve\n  level: 12\nserver: Hub\n").unwrap();

    let out = run_cli(
        &[
            "render",
            "{player.name} (lvl {player.level}) on {server}",
            "--vars",
            path.to_str().unwrap(),
        ],
        "",
    );
    assert_snapshot!(out, @"Steve (lvl 12) on Hub");
}

#[test]
fn json_vars_file_with_var_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vars.json");
    fs::write(&path, r#"{"a": "from file", "b": "kept"}"#).unwrap();

    let out = run_cli(
        &[
            "render",
            "{a} / {b}",
            "--vars",
            path.to_str().unwrap(),
            "--var",
            "a=from flag",
        ],
        "",
    );
    assert_snapshot!(out, @"from flag / kept");
}

#[test]
fn invalid_vars_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vars.json");
    fs::write(&path, "[1, 2]").unwrap();

    let cli = Cli::try_parse_from([
        "chatmark",
        "render",
        "x",
        "--vars",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let err = run(cli, "".as_bytes(), &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("mapping at the top level"));
}

#[test]
fn bad_var_flag_is_rejected_by_clap() {
    let result = Cli::try_parse_from(["chatmark", "render", "x", "--var", "oops"]);
    assert!(result.is_err());
}
