use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::{init_repository_dir, repository_dir};

#[rstest]
fn a_new_branch_points_at_the_current_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let main_sha = common::head_commit_sha(dir.path());

    common::run_jot_command(dir.path(), &["branch", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created branch 'dev' at"));

    assert_eq!(common::branch_sha(dir.path(), "dev"), main_sha);

    Ok(())
}

#[rstest]
fn duplicate_branch_creation_is_refused(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    common::run_jot_command(dir.path(), &["branch", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Branch 'dev' already exists"));

    Ok(())
}

#[rstest]
fn listing_branches_marks_the_current_one(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();

    common::run_jot_command(dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branches:"))
        .stdout(predicate::str::contains("* main"))
        .stdout(predicate::str::contains("(current)"))
        .stdout(predicate::str::contains("dev"));

    Ok(())
}

#[rstest]
fn invalid_branch_names_are_rejected(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(init_repository_dir.path(), &["branch", "bad..name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));

    Ok(())
}

#[rstest]
fn branching_in_an_unborn_repository_creates_an_empty_ref(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    common::run_jot_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created branch 'dev' at HEAD"));

    assert_eq!(common::branch_sha(repository_dir.path(), "dev"), "");

    Ok(())
}

#[rstest]
fn hierarchical_branch_names_are_supported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["branch", "feature/walker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created branch 'feature/walker' at"));

    common::run_jot_command(dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feature/walker"));

    Ok(())
}
