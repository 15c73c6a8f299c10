// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end runs of the `iochart_demo` binary.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("iochart_demo").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--out-dir"));
}

#[test]
fn renders_builtin_charts() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("iochart_demo").unwrap();
    cmd.arg("--out-dir").arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote 9 charts"));

    let profit = fs::read_to_string(dir.path().join("04-profit-loss.svg")).unwrap();
    assert!(profit.starts_with("<svg"), "{profit}");
    assert!(profit.contains(">-2.1k</text>"), "{profit}");

    let empty = fs::read_to_string(dir.path().join("03-empty-dataset.svg")).unwrap();
    assert!(empty.contains("No data to display"), "{empty}");
}

#[test]
fn renders_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = dir.path().join("charts.json");
    fs::write(
        &options,
        r#"[{"type": "pie", "series": [{"name": "a", "value": 3}, {"name": "b", "value": 1}]}]"#,
    )
    .unwrap();

    let out = dir.path().join("out");
    let mut cmd = Command::cargo_bin("iochart_demo").unwrap();
    cmd.arg("--options").arg(&options).arg("--out-dir").arg(&out);
    cmd.assert().success();

    let pie = fs::read_to_string(out.join("00-pie.svg")).unwrap();
    assert_eq!(pie.matches("<path").count(), 2, "{pie}");
    assert!(pie.contains(">75%</text>"), "{pie}");
}

#[test]
fn rejects_unknown_chart_kind() {
    let dir = tempfile::tempdir().unwrap();
    let options = dir.path().join("bad.json");
    fs::write(&options, r#"{"type": "donut", "series": []}"#).unwrap();

    let mut cmd = Command::cargo_bin("iochart_demo").unwrap();
    cmd.arg("--options").arg(&options).arg("--out-dir").arg(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parsing chart options"));
}
