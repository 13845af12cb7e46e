use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("edidscope"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_dump() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("digital_1080p")
        .join("input.hex")
}

#[test]
fn help_lists_decode() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode"));
    cmd().arg("decode").arg("--help").assert().success();
}

#[test]
fn long_version_includes_build_info() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("edidscope"));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");

    cmd()
        .arg("decode")
        .arg(missing)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn text_output_is_default() {
    cmd()
        .arg("decode")
        .arg(sample_dump())
        .assert()
        .success()
        .stdout(
            contains("Manufacturer: DEL [10 AC]")
                .and(contains("border 0 (0 total)"))
                .and(contains("display name \"DELL P2419H\""))
                .and(contains("Pixel clock: 5.70 MHz"))
                .and(contains("128 extension bytes not decoded")),
        );
}

#[test]
fn json_output_is_valid() {
    let assert = cmd()
        .arg("decode")
        .arg(sample_dump())
        .arg("--output")
        .arg("json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["edid"]["manufacturer_id"], "DEL");
    assert_eq!(value["input"]["format"], "hex");
}

#[test]
fn stdin_accepts_hex_dump() {
    let text = std::fs::read_to_string(sample_dump()).expect("read dump");
    cmd()
        .arg("decode")
        .arg("-")
        .arg("--format")
        .arg("hex")
        .write_stdin(text)
        .assert()
        .success()
        .stdout(contains("Manufacturer: DEL"));
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("decode")
        .arg(sample_dump())
        .arg("--output")
        .arg("json")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn report_file_prints_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("decode")
        .arg(sample_dump())
        .arg("--output")
        .arg("json")
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written ->"));

    let json = std::fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["report_version"], 1);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.txt");

    cmd()
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("dump.hex");
    std::fs::copy(sample_dump(), &input).expect("copy dump");

    cmd()
        .arg("decode")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("report path must differ from input"));
}

#[test]
fn glob_resolves_single_match() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::copy(sample_dump(), temp.path().join("monitor.hex")).expect("copy dump");
    let pattern = temp.path().join("*.hex");

    cmd()
        .arg("decode")
        .arg(pattern)
        .assert()
        .success()
        .stdout(contains("Manufacturer: DEL"));
}

#[test]
fn glob_rejects_multiple_matches() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::copy(sample_dump(), temp.path().join("a.hex")).expect("copy dump");
    std::fs::copy(sample_dump(), temp.path().join("b.hex")).expect("copy dump");
    let pattern = temp.path().join("*.hex");

    cmd()
        .arg("decode")
        .arg(pattern)
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern").and(contains("hint:")));
}

#[test]
fn bad_hex_digit_reports_position() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("bad.hex");
    std::fs::write(&input, "00 ff zz").expect("write dump");

    cmd()
        .arg("decode")
        .arg(&input)
        .arg("--format")
        .arg("hex")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid hex digit 'z' at offset 6"));
}

#[test]
fn short_binary_dump_fails() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("short.bin");
    std::fs::write(&input, [0u8; 64]).expect("write dump");

    cmd()
        .arg("decode")
        .arg(&input)
        .arg("--format")
        .arg("binary")
        .assert()
        .failure()
        .stderr(contains("expected 128 bytes, got 64"));
}

#[test]
fn strict_fails_on_invalid_header() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("zeros.bin");
    std::fs::write(&input, [0u8; 128]).expect("write dump");

    cmd()
        .arg("decode")
        .arg(&input)
        .arg("--format")
        .arg("binary")
        .assert()
        .success()
        .stdout(contains("Header: INVALID"));

    cmd()
        .arg("decode")
        .arg(&input)
        .arg("--format")
        .arg("binary")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("EDID header is invalid"));
}
