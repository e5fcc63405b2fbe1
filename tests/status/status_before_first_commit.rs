use crate::common::command::{repository_dir, run_snap_command, run_snap_stdout};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_before_first_commit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let actual_output = run_snap_stdout(repository_dir.path(), &["status"])?;
    assert_eq!(
        actual_output,
        "On branch master\n\nNo commits yet\n\nnothing to commit, working tree clean\n"
    );

    let mut files = write_generated_files(repository_dir.path(), 3)
        .into_iter()
        .map(|file| {
            file.path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();
    files.sort();

    let expected_output = files
        .iter()
        .map(|file| format!("?? {}\n", file))
        .collect::<String>();
    let actual_output = run_snap_stdout(repository_dir.path(), &["status", "--porcelain"])?;
    assert_eq!(actual_output, expected_output);

    Ok(())
}
