use crate::common::command::{get_head_commit_sha, init_repository_dir, run_snap_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_root_commit_as_new_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = get_head_commit_sha(repository_dir.path())?;

    let actual_output = run_snap_stdout(repository_dir.path(), &["show", &head])?;

    let expected_output = format!(
        "commit {}\n\
        Date:   Sun Jan 1 12:00:00 2023 +0000\n\
        \n    Initial commit\n\
        \ndiff --snap a/1.txt b/1.txt\nnew file\n--- /dev/null\n+++ b/1.txt\n@@ -0,0 +1 @@\n+one\n\
        \ndiff --snap a/a/2.txt b/a/2.txt\nnew file\n--- /dev/null\n+++ b/a/2.txt\n@@ -0,0 +1 @@\n+two\n\
        \ndiff --snap a/a/b/3.txt b/a/b/3.txt\nnew file\n--- /dev/null\n+++ b/a/b/3.txt\n@@ -0,0 +1 @@\n+three\n",
        head
    );
    assert_eq!(actual_output, expected_output);

    Ok(())
}
