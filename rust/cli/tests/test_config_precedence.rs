//! Configuration precedence: defaults, then the `HOLECARD_CONFIG` file, then
//! environment variables, then command-line flags. Every test here mutates
//! the process environment, so they run serially.

use holecard_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::fs;

const VARS: &[&str] = &[
    "HOLECARD_CONFIG",
    "HOLECARD_SEED",
    "HOLECARD_DECKS",
    "HOLECARD_BET",
    "HOLECARD_BOT_POLICY",
    "HOLECARD_SIM_BREAK_AFTER",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("holecard").chain(args.iter().copied());
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run_cli(&["cfg"]);
    assert_eq!(code, 0, "stderr: {err}");
    serde_json::from_str(&out).unwrap()
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["decks"]["value"].as_u64(), Some(6));
    assert_eq!(json["decks"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["default_bet"]["value"].as_u64(), Some(10));
    assert_eq!(json["bot_policy"]["value"].as_str(), Some("dealer"));
    assert_eq!(json["bot_policy"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holecard.toml");
    fs::write(&path, "decks = 2\nseed = 456\nbot_policy = \"basic\"\n").unwrap();
    set_env("HOLECARD_CONFIG", &path.to_string_lossy());

    let json = cfg_json();
    assert_eq!(json["decks"]["value"].as_u64(), Some(2));
    assert_eq!(json["decks"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["bot_policy"]["source"].as_str(), Some("file"));
    assert_eq!(json["default_bet"]["source"].as_str(), Some("default"));

    set_env("HOLECARD_SEED", "789");
    set_env("HOLECARD_BOT_POLICY", "cautious");
    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["bot_policy"]["value"].as_str(), Some("cautious"));
    assert_eq!(json["decks"]["source"].as_str(), Some("file"));
    clear_env();
}

#[test]
#[serial]
fn flags_override_config() {
    clear_env();
    set_env("HOLECARD_SEED", "100");
    set_env("HOLECARD_DECKS", "3");

    let (code, out, _) = run_cli(&["deal"]);
    assert_eq!(code, 0);
    assert!(out.contains("Seed: 100"));
    assert!(out.contains("Decks: 3"));

    let (code, out, _) = run_cli(&["deal", "--seed", "5", "--decks", "1"]);
    assert_eq!(code, 0);
    assert!(out.contains("Seed: 5"));
    assert!(out.contains("Decks: 1"));
    clear_env();
}

#[test]
#[serial]
fn invalid_values_fail_with_exit_two() {
    clear_env();
    set_env("HOLECARD_DECKS", "12");
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("decks must be between 1 and 8"), "{err}");

    clear_env();
    set_env("HOLECARD_BOT_POLICY", "martingale");
    let (code, _, err) = run_cli(&["sim", "--rounds", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("unknown bot_policy 'martingale'"), "{err}");

    clear_env();
    set_env("HOLECARD_SEED", "not-a-number");
    let (code, _, err) = run_cli(&["deal"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid seed"), "{err}");
    clear_env();
}

#[test]
#[serial]
fn malformed_file_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "decks = \"six\"\n").unwrap();
    set_env("HOLECARD_CONFIG", &path.to_string_lossy());
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"), "{err}");
    clear_env();
}

#[test]
#[serial]
fn sim_break_after_exits_130() {
    clear_env();
    set_env("HOLECARD_SIM_BREAK_AFTER", "3");
    let (code, out, err) = run_cli(&["sim", "--rounds", "10", "--seed", "1"]);
    assert_eq!(code, 130);
    assert!(out.contains("Interrupted: saved 3/10"));
    assert!(err.contains("Interrupted"));
    clear_env();
}
