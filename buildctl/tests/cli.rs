use std::ffi::OsStr;
use std::process::{Command, Output};

fn run_buildctl<I: IntoIterator<Item=S>, S: AsRef<OsStr>>(args: I) -> Output {
  Command::new(env!("CARGO_BIN_EXE_buildctl"))
    .args(args)
    .env("RUST_LOG", "off")
    .output()
    .expect("failed to run buildctl")
}

fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_exit_success_with_defaults() {
  let output = run_buildctl::<[&str; 0], _>([]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "clean: false\nbuild_dir: .build\n");
}

#[test]
fn test_exit_success_with_value_that_looks_like_option() {
  let output = run_buildctl(["-b", "-c"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "clean: false\nbuild_dir: -c\n");
}

#[test]
fn test_exit_failure_on_missing_value() {
  let output = run_buildctl(["-b"]);
  assert!(!output.status.success());
  let stdout = stdout(&output);
  assert!(stdout.contains("OPTIONS (optional):"));
  assert!(!stdout.contains("build_dir:"));
}

#[test]
fn test_exit_failure_on_unrecognized_option() {
  let output = run_buildctl(["--bogus"]);
  assert!(!output.status.success());
  let stdout = stdout(&output);
  assert!(stdout.contains("OPTIONS (optional):"));
  assert!(!stdout.contains("build_dir:"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_ignored() {
  use std::os::unix::ffi::OsStrExt;

  let output = run_buildctl([OsStr::from_bytes(b"foo\xff"), OsStr::new("-c")]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "clean: true\nbuild_dir: .build\n");
}
