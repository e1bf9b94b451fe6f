use assert_cmd::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::process::Output;

const ABC: &str = r#"{
  "nodes": [{ "name": "A" }, { "name": "B" }, { "name": "C" }, { "name": "D" }],
  "edges": [
    { "from": "A", "to": "B", "weight": 1 },
    { "from": "B", "to": "C", "weight": "2" },
    { "from": 0, "to": 2, "weight": 5 }
  ]
}"#;

const XYZ_MATRIX: &str = r#"{
  "names": ["X", "Y", "Z"],
  "rows": [[0, 4, null], ["4", "0", "1"], ["", 1, 0]]
}"#;

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let exe = assert_cmd::cargo_bin!("pathlab-cli");
    assert_cmd::Command::new(exe)
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("run pathlab-cli")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "pathlab-cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_dijkstra_reads_a_graph_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("graph.json");
    fs::write(&input, ABC).expect("write input");

    let output = run_cli(
        &[
            "dijkstra",
            "--from",
            "A",
            "--to",
            "C",
            input.to_string_lossy().as_ref(),
        ],
        "",
    );
    let json = stdout_json(&output);
    assert_eq!(json["distance"], 3.0);
    assert_eq!(json["path"], json!(["A", "B", "C"]));
    assert_eq!(json["iterations"][1]["settled"], "A, B");
    assert_eq!(json["iterations"][1]["frontier"], "C:[3, B]  D:[∞, -]");
    assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_dijkstra_without_steps_reports_unreachable_as_null() {
    let output = run_cli(
        &["dijkstra", "--no-steps", "--from", "A", "--to", "D", "-"],
        ABC,
    );
    let json = stdout_json(&output);
    assert_eq!(json["distance"], Value::Null);
    assert_eq!(json["path"], json!([]));
    assert!(json.get("snapshots").is_none());
    assert!(json.get("iterations").is_none());
}

#[test]
fn cli_floyd_runs_on_a_typed_matrix() {
    let output = run_cli(&["floyd", "--pretty"], XYZ_MATRIX);
    let json = stdout_json(&output);
    assert_eq!(json["names"], json!(["X", "Y", "Z"]));
    assert_eq!(
        json["distances"],
        json!([[0.0, 4.0, 5.0], [4.0, 0.0, 1.0], [5.0, 1.0, 0.0]])
    );
    assert_eq!(json["routes"].as_array().map(Vec::len), Some(6));
    assert_eq!(
        json["routes"][1],
        json!({ "from": "X", "to": "Z", "distance": 5.0, "path": ["X", "Y", "Z"] })
    );
    assert_eq!(json["iterations"].as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_matrix_exports_an_editable_matrix() {
    let output = run_cli(&["matrix"], ABC);
    let json = stdout_json(&output);
    assert_eq!(json["names"], json!(["A", "B", "C", "D"]));
    assert_eq!(
        json["rows"],
        json!([
            ["0", "1", "5", ""],
            ["", "0", "2", ""],
            ["", "", "0", ""],
            ["", "", "", "0"]
        ])
    );
}

#[test]
fn cli_route_highlights_the_floyd_path() {
    let output = run_cli(&["route", "--from", "A", "--to", "C"], ABC);
    let json = stdout_json(&output);
    assert_eq!(json["distance"], 3.0);
    assert_eq!(json["path"], json!(["A", "B", "C"]));
    assert_eq!(json["highlight"]["nodes"], json!([0, 1, 2]));
    assert_eq!(json["highlight"]["edges"], json!([[0, 1], [1, 2]]));
}

#[test]
fn cli_usage_errors_exit_with_2() {
    for args in [
        &["dijkstra", "--from", "A"][..],
        &["route", "--to", "C"][..],
        &["floyd", "--bogus"][..],
        &["floyd", "a.json", "b.json"][..],
        &["--help"][..],
    ] {
        let output = run_cli(args, ABC);
        assert_eq!(output.status.code(), Some(2), "args {args:?}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE:"));
    }
}

#[test]
fn cli_input_errors_exit_with_1() {
    let bad_weight = r#"{ "nodes": [{}, {}], "edges": [{ "from": 0, "to": 1, "weight": -3 }] }"#;
    let output = run_cli(&["floyd"], bad_weight);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid edge weight"));

    let output = run_cli(&["dijkstra", "--from", "A", "--to", "Q"], ABC);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown node \"Q\""));

    let output = run_cli(&["route", "--from", "B", "--to", "B"], ABC);
    assert_eq!(output.status.code(), Some(1));

    run_cli(&["floyd"], "not json").assert().code(1);
}

#[test]
fn cli_reports_the_field_that_failed_to_parse() {
    let bad_direction = r#"{
      "nodes": [{}, {}],
      "edges": [{ "from": 0, "to": 1, "weight": 1, "direction": "sideways" }]
    }"#;
    let output = run_cli(&["floyd"], bad_direction);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown variant `sideways`"), "stderr: {stderr}");

    let bad_names = r#"{ "names": "X", "rows": [[0]] }"#;
    let output = run_cli(&["floyd"], bad_names);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid type"), "stderr: {stderr}");
}

#[test]
fn cli_fills_blank_matrix_names_around_typed_ones() {
    let doc = r#"{ "names": ["N2", ""], "rows": [[0, 1], [null, 0]] }"#;
    let json = stdout_json(&run_cli(&["floyd"], doc));
    assert_eq!(json["names"], json!(["N2", "N3"]));
    assert_eq!(json["distances"], json!([[0.0, 1.0], [null, 0.0]]));
}
