use crate::common::command::{repository_dir, run_snap_command, run_snap_stdout};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn removing_deleted_files_from_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));

    run_snap_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    delete_path(&repository_dir.path().join("a"));

    run_snap_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success();

    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, "A  1.txt\n");

    Ok(())
}
