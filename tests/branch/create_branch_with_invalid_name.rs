use crate::common::command::{init_repository_dir, run_snap_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case(".hidden")]
#[case("double..dot")]
#[case("trailing/")]
#[case("ends.lock")]
#[case("with space")]
#[case("star*")]
#[case("at@{brace")]
fn create_branch_with_invalid_name(
    init_repository_dir: TempDir,
    #[case] branch_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_snap_command(repository_dir.path(), &["branch", branch_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));

    Ok(())
}
