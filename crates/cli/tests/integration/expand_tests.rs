//! Expansion integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn dependency_providing_os_is_included() {
  let env = TestEnv::new();
  env
    .element("a", Some(&["b"]), None)
    .element("b", Some(&[]), Some(&["operating-system"]));

  env.cmd().arg("a").assert().success().stdout("a b\n");
}

#[test]
fn transitive_dependencies_are_included() {
  let env = TestEnv::new();
  env
    .element("a", Some(&["b"]), None)
    .element("b", Some(&["c"]), None)
    .element("c", None, Some(&["operating-system"]));

  env.cmd().arg("a").assert().success().stdout("a b c\n");
}

#[test]
fn missing_operating_system_fails() {
  let env = TestEnv::new();

  env
    .cmd()
    .arg("no-os")
    .assert()
    .code(1)
    .stdout("")
    .stderr(predicate::str::contains("Please include an operating system element"));
}

#[test]
fn provided_element_requested_explicitly_conflicts() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["ubuntu", "vm", "block-device"])
    .assert()
    .code(1)
    .stdout("")
    .stderr(predicate::str::contains("already provided by another element"))
    .stderr(predicate::str::contains("block-device : already provided by vm"));
}

#[test]
fn unknown_element_fails_with_search_path() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["ubuntu", "missing"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Element 'missing' not found"))
    .stderr(predicate::str::contains(env.search_path()));
}

#[test]
fn provided_element_dependencies_are_not_pulled_in() {
  // block-device depends on "partitioner", which does not exist. vm is
  // expanded first and provides block-device, so its deps file is never
  // read.
  let env = TestEnv::new();
  env.element("image", Some(&["vm", "block-device"]), None);

  env
    .cmd()
    .args(["vm", "image", "ubuntu"])
    .assert()
    .success()
    .stdout("bootloader dpkg image ubuntu vm\n");
}

#[test]
fn earlier_search_path_entry_shadows_fixture() {
  let env = TestEnv::new();
  // Shadow the fixture vm: no deps, provides nothing.
  env.element("vm", None, None);

  env.cmd().args(["ubuntu", "vm"]).assert().success().stdout("dpkg ubuntu vm\n");
}

#[test]
fn elements_path_flag_overrides_environment() {
  let env = TestEnv::new();
  env.element("solo", None, Some(&["operating-system"]));

  env
    .cmd()
    .env("ELEMENTS_PATH", "/nonexistent")
    .arg("--elements-path")
    .arg(env.elements_dir())
    .arg("solo")
    .assert()
    .success()
    .stdout("solo\n");
}

#[test]
fn duplicate_requests_are_collapsed() {
  let env = TestEnv::new();

  env.cmd().args(["ubuntu", "ubuntu"]).assert().success().stdout("dpkg ubuntu\n");
}

#[test]
fn verbose_logs_to_stderr_only() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["--verbose", "ubuntu"])
    .assert()
    .success()
    .stdout("dpkg ubuntu\n")
    .stderr(predicate::str::contains("expanding element"));
}

#[test]
fn empty_elements_path_flag_is_not_blamed_on_environment() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["--elements-path", "", "ubuntu"])
    .assert()
    .code(1)
    .stdout("")
    .stderr(predicate::str::contains("element search path is empty"))
    .stderr(predicate::str::contains("ELEMENTS_PATH").not());
}
