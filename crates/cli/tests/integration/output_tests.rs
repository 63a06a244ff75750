//! Output format integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, fixture_elements};

#[test]
fn json_format_lists_elements() {
  let env = TestEnv::new();

  let output = env.cmd().args(["--format", "json", "ubuntu", "vm"]).output().unwrap();
  assert!(output.status.success());

  let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(
    value,
    serde_json::json!({ "elements": ["bootloader", "dpkg", "ubuntu", "vm"] })
  );
}

#[test]
fn env_format_exports_elements_and_paths() {
  let env = TestEnv::new();
  let fixtures = dunce::canonicalize(fixture_elements()).unwrap();

  env
    .cmd()
    .args(["--format", "env", "ubuntu"])
    .assert()
    .success()
    .stdout(predicate::str::contains("export IMAGE_ELEMENT='dpkg ubuntu'\n"))
    .stdout(predicate::str::contains("export IMAGE_ELEMENT_YAML='{"))
    .stdout(predicate::str::contains(format!(
      "\"ubuntu\":\"{}\"",
      fixtures.join("ubuntu").display()
    )));
}

#[test]
fn errors_produce_no_stdout_in_any_format() {
  let env = TestEnv::new();

  for format in ["text", "json", "env"] {
    env
      .cmd()
      .args(["--format", format, "no-os"])
      .assert()
      .failure()
      .stdout("");
  }
}
