//! Work directory detection and logging verbosity.

#![cfg(unix)]

mod common;

use common::TestEnv;

#[test]
fn missing_workdir_is_fatal() {
    let env = TestEnv::new();

    let res = env.run(&["--no-paketize", "--no-bundle"]);
    assert_eq!(res.exit_code, 1);
    assert!(res.stderr.contains("workdir autodetection failed"));
}

#[test]
fn workdir_override_skips_autodetection() {
    let env = TestEnv::new();
    env.mkdirs("custom/work");

    let res = env.run(&["--workdir", "custom/work", "--no-paketize", "--no-bundle"]);
    assert!(res.success, "{}", res.combined_output());
    assert!(env.path("custom/work/static/apps").is_dir());
}

#[test]
fn quiet_suppresses_progress_output() {
    let env = TestEnv::with_workdir();

    let res = env.run(&["--no-paketize", "--no-bundle", "--quiet"]);
    assert!(res.success);
    assert!(res.stdout.is_empty(), "stdout: {}", res.stdout);
}

#[test]
fn verbose_adds_detail_output() {
    let env = TestEnv::with_workdir();
    env.write("app/static/apps/stale.js", "s");

    let quiet = env.run(&["--no-paketize", "--no-bundle"]);
    let verbose = env.run(&["--no-paketize", "--no-bundle", "--verbose"]);
    assert!(verbose.stdout.len() > quiet.stdout.len());
}
