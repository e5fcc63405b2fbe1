use crate::common::command::{
    get_branch_commit_sha, init_repository_dir, run_snap_command, snap_commit_all,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_duplicate_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let branch_name = "feature-branch";

    run_snap_command(repository_dir.path(), &["branch", branch_name])
        .assert()
        .success();
    let branch_tip = get_branch_commit_sha(repository_dir.path(), branch_name)?;

    // move master forward so that a silent overwrite would be visible
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    snap_commit_all(repository_dir.path(), "Second commit");

    run_snap_command(repository_dir.path(), &["branch", branch_name])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(
        get_branch_commit_sha(repository_dir.path(), branch_name)?,
        branch_tip
    );

    Ok(())
}
