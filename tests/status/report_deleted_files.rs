use crate::common::command::{init_repository_dir, run_snap_command, run_snap_stdout};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    // staged with the committed content, then removed from disk
    run_snap_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    delete_path(&repository_dir.path().join("1.txt"));

    // never restaged, removed from disk
    delete_path(&repository_dir.path().join("a").join("b"));

    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, "D  1.txt\nD  a/b/3.txt\n");

    Ok(())
}
