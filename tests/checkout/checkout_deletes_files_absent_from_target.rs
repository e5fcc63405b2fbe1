use crate::common::command::{repository_dir, run_snap_command, snap_commit_all};
use crate::common::file::{FileSpec, delete_path, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_deletes_files_absent_from_target(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let a = repository_dir.path().join("a");
    let b = repository_dir.path().join("nested").join("b");

    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(a.clone(), "alpha".to_string()));
    write_file(FileSpec::new(b.clone(), "beta".to_string()));
    snap_commit_all(repository_dir.path(), "Files a and b");

    run_snap_command(repository_dir.path(), &["branch", "with-b"])
        .assert()
        .success();

    delete_path(&b);
    snap_commit_all(repository_dir.path(), "Only a");

    run_snap_command(repository_dir.path(), &["checkout", "with-b"])
        .assert()
        .success();
    assert_eq!(read_file(&b), "beta");

    run_snap_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success();

    assert!(!b.exists());
    assert!(!repository_dir.path().join("nested").exists());
    assert_eq!(read_file(&a), "alpha");

    Ok(())
}
