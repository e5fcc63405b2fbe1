use crate::common::command::{repository_dir, run_snap_command, run_snap_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
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
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_snap_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success();

    let index: serde_json::Value = serde_json::from_slice(&std::fs::read(
        repository_dir.path().join(".snap").join("index"),
    )?)?;
    let staged_paths = index
        .as_object()
        .map(|entries| entries.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    assert_eq!(staged_paths, vec!["a/2.txt", "a/b/3.txt"]);

    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, "?? 1.txt\nA  a/2.txt\nA  a/b/3.txt\n");

    Ok(())
}
