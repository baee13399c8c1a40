// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end tests for the replay-frame binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("replay-frame").unwrap()
}

#[test]
fn outer_and_inner_urls() {
    cli()
        .args(["outer-url", "--ts", "20200101000000", "http://a.com/"])
        .assert()
        .success()
        .stdout("/web/20200101000000/http://a.com/\n");

    cli()
        .args(["inner-url", "--prefix", "/pywb/", "http://a.com/"])
        .assert()
        .success()
        .stdout("/pywb/mp_/http://a.com/\n");
}

#[test]
fn extractors() {
    cli()
        .args(["extract-ts", "http://x/20200101000000mp_/http://orig"])
        .assert()
        .success()
        .stdout("20200101000000\n");

    cli()
        .args(["extract-url", "http://x/2020mp_/https://orig.org/p"])
        .assert()
        .success()
        .stdout("https://orig.org/p\n");

    cli()
        .args(["cookie-ts", "a=1; pywb.timestamp=20200101000000; b=2"])
        .assert()
        .success()
        .stdout("20200101000000\n");
}

#[test]
fn format_ts_gmt_and_passthrough() {
    cli()
        .args(["format-ts", "20200101000000"])
        .assert()
        .success()
        .stdout("Wed, 01 Jan 2020 00:00:00 GMT\n");

    cli()
        .args(["format-ts", "2020010100"])
        .assert()
        .success()
        .stdout("2020010100\n");
}

#[test]
fn check_config_prints_resolved_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"prefix":"/web/","labels":{{"live":"LIVE"}}}}"#).unwrap();

    cli()
        .args(["check-config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("prefix: /web/"))
        .stdout(predicate::str::contains("labels.live: LIVE"))
        .stdout(predicate::str::contains("labels.replay: Archived"))
        .stdout(predicate::str::contains("slots.label: _wb_label"));
}

#[test]
fn check_config_rejects_missing_prefix() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();

    cli()
        .args(["check-config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing prefix"));
}

#[test]
fn logs_follow_rust_log() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"prefix":"/web/"}}"#).unwrap();

    cli()
        .env("RUST_LOG", "debug")
        .args(["check-config"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("config ok"));

    cli()
        .env_remove("RUST_LOG")
        .args(["check-config"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("config ok").not());
}
