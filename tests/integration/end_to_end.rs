use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{EventWorkspace, bare_event, event, pair_events};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mc_multiplicity"))
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success();
    serde_json::from_slice(&out.get_output().stdout).unwrap()
}

fn accepted_events(report: &serde_json::Value) -> Vec<u64> {
    report["decisions"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["accepted"].as_bool().unwrap())
        .map(|d| d["event"].as_u64().unwrap())
        .collect()
}

#[test]
fn pair_selection_from_settings_file() {
    let ws = EventWorkspace::new();
    let settings = ws.pair_settings();
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    let report = json_output(bin().arg("--config").arg(&settings).args(["--format", "json"]).arg(&events));

    assert_eq!(accepted_events(&report), vec![1, 3]);
    assert_eq!(report["summary"]["total"], 4);
    assert_eq!(report["summary"]["rejected"], 2);
    assert_eq!(report["decisions"][2]["match_count"], 2);
}

#[test]
fn pair_selection_from_flags() {
    let ws = EventWorkspace::new();
    let events = ws.write_json("events.json", &pair_events());

    let report = json_output(
        bin()
            .args(["--particle-ids", "11,-11", "--multiple-of", "2", "--min", "2", "--status", "1"])
            .args(["--format", "json"])
            .arg(&events),
    );
    assert_eq!(accepted_events(&report), vec![1, 3]);
}

#[test]
fn absolute_ids_fold_antiparticles() {
    let ws = EventWorkspace::new();
    let events = ws.write_jsonl("events.jsonl", &[event(1, &[(13, 1), (-13, 1)])]);

    let signed = json_output(
        bin().args(["--particle-ids", "13", "--multiple-of", "2", "--format", "json"]).arg(&events),
    );
    assert_eq!(signed["decisions"][0]["match_count"], 1);
    assert!(accepted_events(&signed).is_empty());

    let folded = json_output(
        bin()
            .args(["--particle-ids", "13", "--multiple-of", "2", "--abs-id", "--format", "json"])
            .arg(&events),
    );
    assert_eq!(folded["decisions"][0]["match_count"], 2);
    assert_eq!(accepted_events(&folded), vec![1]);
}

#[test]
fn abs_id_false_overrides_settings_file() {
    let ws = EventWorkspace::new();
    let settings = ws.write(
        "folded.json",
        r#"{"particleIDs": [13], "multipleOf": 2, "absID": true}"#,
    );
    let events = ws.write_jsonl("events.jsonl", &[event(1, &[(13, 1), (-13, 1)])]);

    let from_file = json_output(bin().arg("--config").arg(&settings).args(["--format", "json"]).arg(&events));
    assert_eq!(accepted_events(&from_file), vec![1]);

    let overridden = json_output(
        bin()
            .arg("--config")
            .arg(&settings)
            .args(["--abs-id=false", "--format", "json"])
            .arg(&events),
    );
    assert_eq!(overridden["decisions"][0]["match_count"], 1);
    assert!(accepted_events(&overridden).is_empty());
}

#[test]
fn zero_divisor_refuses_to_start() {
    let ws = EventWorkspace::new();
    let events = ws.write_jsonl("events.jsonl", &pair_events());

    bin()
        .args(["--multiple-of", "0"])
        .arg(&events)
        .assert()
        .failure()
        .stderr(predicate::str::contains("multipleOf must be positive"));
}

#[test]
fn zero_divisor_is_rejected_before_reading_inputs() {
    bin()
        .args(["--multiple-of", "0", "does-not-exist.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("multipleOf must be positive"));
}

#[test]
fn missing_collection_is_reported_not_accepted() {
    let ws = EventWorkspace::new();
    let events = ws.write_jsonl("events.jsonl", &[event(1, &[]), bare_event(2)]);

    let report = json_output(bin().args(["--format", "json"]).arg(&events));
    assert_eq!(accepted_events(&report), vec![1]);
    assert_eq!(report["summary"]["failed"], 1);
    assert_eq!(report["failures"][0]["event"], 2);
}

#[test]
fn strict_mode_fails_on_missing_collection() {
    let ws = EventWorkspace::new();
    let events = ws.write_jsonl("events.jsonl", &[event(1, &[]), bare_event(2)]);

    bin()
        .arg("--strict")
        .arg(&events)
        .assert()
        .failure()
        .stderr(predicate::str::contains("selection aborted at event 2"));
}

#[test]
fn module_label_selects_collection() {
    let ws = EventWorkspace::new();
    let events = ws.write(
        "events.jsonl",
        concat!(
            r#"{"event": 1, "collections": {"generator": [{"pdg_id": 22, "status": 1}], "generator:unsmeared": []}}"#,
            "\n"
        ),
    );

    let default_label = json_output(
        bin().args(["--particle-ids", "22", "--min", "1", "--format", "json"]).arg(&events),
    );
    assert!(accepted_events(&default_label).is_empty());

    let smeared = json_output(
        bin()
            .args(["--particle-ids", "22", "--min", "1", "--module-label", "generator"])
            .args(["--format", "json"])
            .arg(&events),
    );
    assert_eq!(accepted_events(&smeared), vec![1]);
}

#[test]
fn multiple_files_are_concatenated_and_duplicates_rejected() {
    let ws = EventWorkspace::new();
    let first = ws.write_jsonl("a.jsonl", &[event(1, &[])]);
    let second = ws.write_json("b.json", &[event(2, &[])]);
    let report = json_output(bin().args(["--format", "json"]).arg(&first).arg(&second));
    assert_eq!(report["summary"]["total"], 2);

    let duplicate = ws.write_jsonl("c.jsonl", &[event(1, &[])]);
    bin()
        .arg(&first)
        .arg(&duplicate)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));
}

#[test]
fn report_written_to_output_file() {
    let ws = EventWorkspace::new();
    let events = ws.write_jsonl("events.jsonl", &pair_events());
    let report_path = ws.root().join("report.json");

    bin()
        .args(["--format", "json", "--output"])
        .arg(&report_path)
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["total"], 4);
}

#[test]
fn single_worker_matches_parallel_run() {
    let ws = EventWorkspace::new();
    let many: Vec<_> = (0..200u64)
        .map(|i| event(i, &[(11, 1); 3][..(i % 4) as usize]))
        .collect();
    let events = ws.write_jsonl("many.jsonl", &many);

    let serial = json_output(bin().args(["-j", "1", "--multiple-of", "2", "--particle-ids", "11"]).args(["--format", "json"]).arg(&events));
    let parallel = json_output(bin().args(["-j", "4", "--multiple-of", "2", "--particle-ids", "11"]).args(["--format", "json"]).arg(&events));
    assert_eq!(serial["decisions"], parallel["decisions"]);
}
