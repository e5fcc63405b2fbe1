use crate::common::command::{get_history, repository_with_multiple_commits, run_snap_command, run_snap_stdout};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_commit_detaches_head(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_multiple_commits;
    let history = get_history(repository_dir.path())?;
    let first_commit = history[3].clone();

    run_snap_command(repository_dir.path(), &["checkout", &first_commit])
        .assert()
        .success()
        .stderr(predicate::str::contains("detached HEAD"))
        .stderr(predicate::str::contains(format!(
            "HEAD is now at {} First commit",
            &first_commit[..7]
        )));

    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join(".snap").join("HEAD"))?,
        first_commit
    );
    assert!(repository_dir.path().join("file1.txt").exists());
    assert!(!repository_dir.path().join("file2.txt").exists());
    assert!(!repository_dir.path().join("file4.txt").exists());

    let status = run_snap_stdout(repository_dir.path(), &["status"])?;
    assert!(status.starts_with(&format!("HEAD detached at {}", &first_commit[..7])));

    run_snap_command(repository_dir.path(), &["checkout", &history[1]])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Previous HEAD position was {} First commit",
            &first_commit[..7]
        )));

    Ok(())
}
