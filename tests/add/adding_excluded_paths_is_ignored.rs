use crate::common::command::{repository_dir, run_snap_command, run_snap_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_excluded_paths_is_ignored(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("main.rs"),
        "fn main() {}".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join(".env"),
        "SECRET=1".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("target").join("out.bin"),
        "binary".to_string(),
    ));

    run_snap_command(repository_dir.path(), &["add", ".", ".env"])
        .env("SNAP_EXCLUDE", "target")
        .assert()
        .success();

    let actual_output = run_snap_command(repository_dir.path(), &["status", "--porcelain"])
        .env("SNAP_EXCLUDE", "target")
        .assert()
        .success();
    let actual_output = String::from_utf8(actual_output.get_output().stdout.clone())?;
    assert_eq!(actual_output, "A  main.rs\n");

    // without the extra exclusion the build output shows up as untracked
    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, "A  main.rs\n?? target/out.bin\n");

    Ok(())
}
