//! Integration tests for the cmudict CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn cmudict() -> Command {
    Command::cargo_bin("cmudict").unwrap()
}

#[test]
fn test_validate_clean_dictionary() {
    let mut cmd = cmudict();
    cmd.arg("validate").arg("-i").arg(fixture_path("sample.dict"));

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_reports_problems() {
    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("with_errors.dict"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("with_errors.dict:2: "))
        .stdout(predicate::str::contains(
            "with_errors.dict:3: Unsupported entry: \"???\"",
        ))
        .stdout(predicate::str::contains(
            "with_errors.dict:4: Invalid phoneme \"XX\" in entry: \"B  B IY1 XX\"",
        ))
        .stderr(predicate::str::contains(
            "Validation failed: 3 problem(s) in 1 file(s)",
        ));
}

#[test]
fn test_validate_disabled_checks_keep_parse_errors() {
    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("with_errors.dict"))
        .arg("-W")
        .arg("none");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Unsupported entry"))
        .stdout(predicate::str::contains("Invalid phoneme").not())
        .stderr(predicate::str::contains("1 problem(s)"));
}

#[test]
fn test_validate_json_output() {
    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("with_errors.dict"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .failure()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"check\": \"context-ordering\""))
        .stdout(predicate::str::contains("\"check\": null"))
        .stdout(predicate::str::contains("\"line\": 4"));
}

#[test]
fn test_validate_glob_pattern() {
    let mut cmd = cmudict();
    cmd.arg("validate").arg("-i").arg(fixture_path("*.dict"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("with_errors.dict:2: "))
        .stdout(predicate::str::contains("sample.dict").not());
}

#[test]
fn test_validate_festlex() {
    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("sample.scm"))
        .arg("-W")
        .arg("all");

    cmd.assert().success();
}

#[test]
fn test_validate_invalid_file() {
    let mut cmd = cmudict();
    cmd.arg("validate").arg("-i").arg("nonexistent.dict");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_validate_invalid_warning() {
    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("sample.dict"))
        .arg("-W")
        .arg("bogus");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid warning: bogus"));
}

#[test]
fn test_validate_ipa_accent_is_rejected() {
    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("sample.dict"))
        .arg("--accent")
        .arg("en-US-x-ipa");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not currently supported"));
}

#[test]
fn test_validate_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("cmudict.toml");
    fs::write(
        &config,
        "[validation]\nwarnings = [\"none\"]\n\n[output]\ndefault-format = \"json\"\npretty-json = false\n",
    )
    .unwrap();

    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("sample.dict"))
        .arg("-c")
        .arg(&config);

    cmd.assert().success().stdout("[]\n");
}

#[test]
fn test_command_line_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("cmudict.toml");
    fs::write(&config, "[validation]\nwarnings = [\"none\"]\n").unwrap();

    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("with_errors.dict"))
        .arg("-c")
        .arg(&config)
        .arg("-W")
        .arg("invalid-phonemes");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Invalid phoneme"))
        .stderr(predicate::str::contains("2 problem(s)"));
}

#[test]
fn test_convert_to_festlex() {
    let mut cmd = cmudict();
    cmd.arg("convert")
        .arg("-i")
        .arg(fixture_path("sample.dict"))
        .arg("-t")
        .arg("festlex");

    cmd.assert().success().stdout(
        ";; sample dictionary\n\
         (\"abandon\" nil (ah0 b ae1 n d ah0 n))\n\
         (\"read\" nil (r eh1 d))\n\
         (\"read\" 1 (r iy1 d)) ;present tense\n\
         (\"run\" nil (r ah1 n))\n",
    );
}

#[test]
fn test_convert_from_festlex() {
    let mut cmd = cmudict();
    cmd.arg("convert")
        .arg("-i")
        .arg(fixture_path("sample.scm"))
        .arg("-t")
        .arg("cmudict-new");

    cmd.assert()
        .success()
        .stdout(";;; festival lexicon\nread(n) R EH1 D\nread(v) R IY1 D\n");
}

#[test]
fn test_convert_to_ipa() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("run.dict");
    fs::write(&input, "RUN  R AH1 N\n").unwrap();

    let mut cmd = cmudict();
    cmd.arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-t")
        .arg("cmudict")
        .arg("--accent")
        .arg("en-GB-x-ipa");

    cmd.assert().success().stdout("RUN  ɹˈʌn\n");
}

#[test]
fn test_convert_sorted_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("unsorted.dict");
    let output = temp_dir.path().join("sorted.dict");
    fs::write(&input, ";;; words\nB  B IY1\nA  AH0\n").unwrap();

    let mut cmd = cmudict();
    cmd.arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-t")
        .arg("cmudict")
        .arg("--sort")
        .arg("by-word")
        .arg("-o")
        .arg(&output);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, ";;; words\nA  AH0\nB  B IY1\n");
}

#[test]
fn test_convert_sends_diagnostics_to_stderr() {
    let mut cmd = cmudict();
    cmd.arg("convert")
        .arg("-i")
        .arg(fixture_path("with_errors.dict"))
        .arg("-t")
        .arg("cmudict");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A  AH0\n"))
        .stdout(predicate::str::contains("B  B IY1 XX\n"))
        .stdout(predicate::str::contains("???").not())
        .stderr(predicate::str::contains("3: Unsupported entry: \"???\""));
}

#[test]
fn test_convert_unknown_dialect() {
    let mut cmd = cmudict();
    cmd.arg("convert")
        .arg("-i")
        .arg(fixture_path("sample.dict"))
        .arg("-t")
        .arg("ipa");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported dictionary format: ipa"));
}

#[test]
fn test_help_command() {
    let mut cmd = cmudict();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pronunciation dictionaries"));
}

#[test]
fn test_list_checks() {
    let mut cmd = cmudict();
    cmd.arg("list").arg("checks");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("context-ordering"))
        .stdout(predicate::str::contains("duplicate-pronunciations"));
}

#[test]
fn test_list_dialects() {
    let mut cmd = cmudict();
    cmd.arg("list").arg("dialects");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cmudict-weide"))
        .stdout(predicate::str::contains("festlex"));
}

#[test]
fn test_list_accents() {
    let mut cmd = cmudict();
    cmd.arg("list").arg("accents");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en-US-x-festvox"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("cmudict.toml");

    let mut cmd = cmudict();
    cmd.arg("generate-config").arg("-o").arg(&config);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let mut cmd = cmudict();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("sample.dict"))
        .arg("-c")
        .arg(&config);
    cmd.assert().success();
}
