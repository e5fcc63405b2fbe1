use crate::common::command::{repository_dir, run_snap_command, run_snap_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let actual_output = run_snap_stdout(repository_dir.path(), &["log"])?;

    assert_eq!(actual_output, "No commits yet\n");

    Ok(())
}
