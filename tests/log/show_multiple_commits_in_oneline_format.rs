use crate::common::command::{get_history, repository_with_multiple_commits, run_snap_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_oneline_format(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_multiple_commits;
    let history = get_history(repository_dir.path())?;

    let expected_output = format!(
        "{} Fourth commit\n{} Third commit\n{} Second commit\n{} First commit\n",
        &history[0][..7],
        &history[1][..7],
        &history[2][..7],
        &history[3][..7]
    );

    let actual_output = run_snap_stdout(repository_dir.path(), &["log", "--oneline"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
