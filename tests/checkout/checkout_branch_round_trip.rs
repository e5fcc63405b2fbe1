use crate::common::command::{init_repository_dir, run_snap_command, run_snap_stdout, snap_commit_all};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_round_trip(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let file1 = repository_dir.path().join("1.txt");

    run_snap_command(repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(file1.clone(), "modified one".to_string()));
    snap_commit_all(repository_dir.path(), "Modify one");

    run_snap_command(repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to branch 'feature'"));

    assert_eq!(read_file(&file1), "one");
    assert_eq!(read_file(&repository_dir.path().join("a").join("b").join("3.txt")), "three");
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join(".snap").join("HEAD"))?,
        "ref: refs/heads/feature"
    );
    assert_eq!(std::fs::read_to_string(repository_dir.path().join(".snap").join("index"))?, "{}");
    assert_eq!(
        run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?,
        ""
    );

    run_snap_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to branch 'master'"));

    assert_eq!(read_file(&file1), "modified one");

    run_snap_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Already on 'master'"));

    Ok(())
}
