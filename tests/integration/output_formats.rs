use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{EventWorkspace, bare_event, event, pair_events};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mc_multiplicity"))
}

#[test]
fn table_is_the_default() {
    let ws = EventWorkspace::new();
    let settings = ws.pair_settings();
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    bin()
        .arg("--config")
        .arg(&settings)
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::contains("collection=generator:unsmeared"))
        .stdout(predicate::str::contains("EVENT"))
        .stdout(predicate::str::contains("total=4 accepted=2 rejected=2 failed=0"));
}

#[test]
fn jsonl_emits_one_record_per_line() {
    let ws = EventWorkspace::new();
    let events = ws.write_jsonl("events.jsonl", &[event(1, &[]), bare_event(2)]);

    let out = bin().args(["--format", "jsonl"]).arg(&events).assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    let kinds: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["kind"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(kinds, ["decision", "failure", "summary"]);
}

#[test]
fn yaml_report_carries_settings() {
    let ws = EventWorkspace::new();
    let settings = ws.pair_settings();
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    bin()
        .arg("--config")
        .arg(&settings)
        .args(["--format", "yaml"])
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::contains("multipleOf: 2"))
        .stdout(predicate::str::contains("accepted: 2"));
}

#[test]
fn only_accepted_filters_listing_not_summary() {
    let ws = EventWorkspace::new();
    let settings = ws.pair_settings();
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    let out = bin()
        .arg("--config")
        .arg(&settings)
        .args(["--format", "json", "--only", "accepted"])
        .arg(&events)
        .assert()
        .success();
    let report: serde_json::Value = serde_json::from_slice(&out.get_output().stdout).unwrap();
    let listed: Vec<u64> = report["decisions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["event"].as_u64().unwrap())
        .collect();
    assert_eq!(listed, vec![1, 3]);
    assert_eq!(report["summary"]["rejected"], 2);
}

#[test]
fn yaml_settings_file_is_accepted() {
    let ws = EventWorkspace::new();
    let settings = ws.write(
        "pair.yaml",
        "particleIDs: [11, -11]\nmultipleOf: 2\nmin: 2\nstatus: 1\n",
    );
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    bin()
        .arg("--config")
        .arg(&settings)
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted=2"));
}

#[test]
fn unknown_settings_key_is_a_configuration_error() {
    let ws = EventWorkspace::new();
    let settings = ws.write("bad.json", r#"{"multipleof": 2}"#);
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    bin()
        .arg("--config")
        .arg(&settings)
        .arg(&events)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn unsupported_input_extension_fails() {
    let ws = EventWorkspace::new();
    let events = ws.write("events.txt", "");

    bin()
        .arg(&events)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input format"));
}
