use assert_cmd::Command;
use predicates::prelude::*;

fn when() -> Command {
    Command::cargo_bin("when").unwrap()
}

#[test]
fn usage_without_args() {
    when()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: when"));
}

#[test]
fn tokens_from_text() {
    when()
        .args(["tokens", "--text", "next friday at 3pm"])
        .assert()
        .success()
        .stdout(
            "relative\t0..4\tnext\n\
             weekday\t5..11\tfriday\n\
             connector\t12..14\tat\n\
             integer\t15..16\t3\n\
             ampm\t16..18\tpm\n",
        );
}

#[test]
fn tokens_from_stdin() {
    when()
        .arg("tokens")
        .write_stdin("Q3")
        .assert()
        .success()
        .stdout("quarter\t0..2\tQ3\n");
}

#[test]
fn tokens_from_dash_reads_stdin() {
    when()
        .args(["tokens", "-"])
        .write_stdin("h2")
        .assert()
        .success()
        .stdout("half\t0..2\tH2\n");
}

#[test]
fn tokens_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expr.txt");
    std::fs::write(&path, "3rd of March\n").unwrap();
    when()
        .arg("tokens")
        .arg(&path)
        .assert()
        .success()
        .stdout("ordinal\t0..3\t3rd\nconnector\t4..6\tof\nmonth\t7..12\tmarch\n");
}

#[test]
fn trivia_is_opt_in() {
    when()
        .args(["tokens", "--trivia", "--text", "q1 q2\n"])
        .assert()
        .success()
        .stdout("quarter\t0..2\tQ1\nws\t2..3\t \nquarter\t3..5\tQ2\nnewline\t5..6\t\\n\n");
}

#[test]
fn original_column() {
    when()
        .args(["tokens", "--original", "--text", "Next Friday"])
        .assert()
        .success()
        .stdout("relative\t0..4\tnext\tNext\nweekday\t5..11\tfriday\tFriday\n");
}

#[test]
fn json_lines() {
    let out = when()
        .args(["tokens", "--json", "--original", "--text", "3PM"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "integer");
    assert_eq!(lines[0]["offset"], 0);
    assert_eq!(lines[1]["type"], "ampm");
    assert_eq!(lines[1]["text"], "pm");
    assert_eq!(lines[1]["original"], "PM");
    assert_eq!(lines[1]["col"], 2);
    assert_eq!(lines[1]["lineBreaks"], 0);
}

#[test]
fn json_offset_counts_characters() {
    let out = when()
        .args(["tokens", "--json", "--text", "caf\u{e9} 3pm"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let integer: serde_json::Value = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .find(|v| v["type"] == "integer")
        .unwrap();
    assert_eq!(integer["offset"], 5);
    assert_eq!(integer["col"], 6);
}

#[test]
fn text_and_file_conflict() {
    when()
        .args(["tokens", "--text", "today", "expr.txt"])
        .assert()
        .code(2);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    when()
        .arg("tokens")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Read failed"));
}

#[test]
fn errors_are_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let out = when()
        .arg("tokens")
        .arg(dir.path().join("absent.txt"))
        .output()
        .unwrap();
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.matches("Read failed").count(), 1, "{stderr}");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
}
