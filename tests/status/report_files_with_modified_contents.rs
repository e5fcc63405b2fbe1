use crate::common::command::{init_repository_dir, run_snap_command, run_snap_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "modified one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "modified two".to_string(),
    ));

    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, " M 1.txt\n M a/2.txt\n");

    // staging one of them moves it to the first column
    run_snap_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, "M  1.txt\n M a/2.txt\n");

    Ok(())
}
