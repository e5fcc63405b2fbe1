use crate::common::command::{get_history, repository_with_multiple_commits, run_snap_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_linear_history_in_medium_format(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_multiple_commits;
    let history = get_history(repository_dir.path())?;
    let messages = ["Fourth commit", "Third commit", "Second commit", "First commit"];

    let expected_output = history
        .iter()
        .zip(messages)
        .map(|(commit_id, message)| {
            format!(
                "commit {}\nDate:   Sun Jan 1 12:00:00 2023 +0000\n\n    {}\n",
                commit_id, message
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let actual_output = run_snap_stdout(repository_dir.path(), &["log"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
