use crate::common::command::{
    get_branch_commit_sha, get_head_commit_sha, get_history, repository_with_multiple_commits,
    run_snap_command, snap_commit_all,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_on_detached_head_moves_only_head(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_multiple_commits;
    let history = get_history(repository_dir.path())?;
    let master_tip = history[0].clone();
    let second_commit = history[2].clone();

    run_snap_command(repository_dir.path(), &["checkout", &second_commit])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("experiment.txt"),
        "trying something".to_string(),
    ));
    run_snap_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    crate::common::command::snap_commit(repository_dir.path(), "Experiment")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[detached HEAD [0-9a-f]{7}\] Experiment\n$")?)
        .stderr(predicate::str::contains("HEAD is detached"));

    let head = std::fs::read_to_string(repository_dir.path().join(".snap").join("HEAD"))?;
    assert_ne!(head, second_commit);
    assert_eq!(head, get_head_commit_sha(repository_dir.path())?);
    assert_eq!(get_branch_commit_sha(repository_dir.path(), "master")?, master_tip);

    // a second detached commit keeps building on the detached line
    write_file(FileSpec::new(
        repository_dir.path().join("experiment.txt"),
        "trying harder".to_string(),
    ));
    snap_commit_all(repository_dir.path(), "Experiment 2");

    let detached_history = get_history(repository_dir.path())?;
    assert_eq!(detached_history.len(), 4);
    assert_eq!(detached_history[1], head);
    assert_eq!(detached_history[2], second_commit);

    Ok(())
}
