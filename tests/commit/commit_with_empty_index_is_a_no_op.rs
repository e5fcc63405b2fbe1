use crate::common::command::{count_objects, repository_dir, run_snap_command, snap_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_empty_index_is_a_no_op(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("untracked.txt"),
        "not staged".to_string(),
    ));

    let output = snap_commit(repository_dir.path(), "Nothing here")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(stdout, "nothing to commit\n");
    assert_eq!(count_objects(repository_dir.path()), 0);
    assert_eq!(
        std::fs::read_to_string(
            repository_dir
                .path()
                .join(".snap")
                .join("refs")
                .join("heads")
                .join("master")
        )?,
        ""
    );

    Ok(())
}
