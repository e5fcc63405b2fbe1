use crate::common::command::{repository_dir, run_snap_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::status(&["status"])]
#[case::log(&["log"])]
#[case::add(&["add", "."])]
#[case::commit(&["commit", "-m", "msg"])]
#[case::branch(&["branch"])]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    run_snap_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a snap repository"));

    assert!(!repository_dir.path().join(".snap").exists());

    Ok(())
}
