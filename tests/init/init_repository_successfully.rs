use crate::common;
use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("snap")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty snap repository in .+\.snap\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let control_dir = dir.path().join(".snap");
    assert!(control_dir.join("objects").is_dir());
    assert_eq!(
        std::fs::read_to_string(control_dir.join("HEAD"))?,
        "ref: refs/heads/master"
    );
    assert_eq!(
        std::fs::read_to_string(control_dir.join("refs").join("heads").join("master"))?,
        ""
    );
    assert_eq!(std::fs::read_to_string(control_dir.join("index"))?, "{}");

    Ok(())
}
