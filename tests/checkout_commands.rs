use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::{init_repository_dir, repository_dir};

#[rstest]
fn checkout_b_creates_the_branch_and_switches(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["checkout", "-b", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created branch 'feature'"))
        .stdout(predicate::str::contains("Switched to branch 'feature'"));

    let head = common::read_file(dir.path(), ".jot/HEAD");
    assert_eq!(head.trim(), "ref: refs/heads/feature");

    Ok(())
}

#[rstest]
fn switching_back_removes_paths_absent_from_the_target_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["checkout", "-b", "feature"])
        .assert()
        .success();
    common::write_file(dir.path(), "feature.txt", "only here");
    common::run_jot_command(dir.path(), &["add", "feature.txt"])
        .assert()
        .success();
    common::run_jot_command(dir.path(), &["commit", "-m", "feature work"])
        .assert()
        .success();

    common::run_jot_command(dir.path(), &["checkout", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'main'"));

    // the feature-only file is gone, main's snapshot is back
    assert!(!dir.path().join("feature.txt").exists());
    assert_eq!(common::read_file(dir.path(), "1.txt"), "one");
    assert_eq!(common::read_file(dir.path(), "a/b/3.txt"), "three");

    Ok(())
}

#[rstest]
fn checkout_restores_unstaged_edits_to_the_target_snapshot(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    common::write_file(dir.path(), "1.txt", "scribbled over");

    common::run_jot_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'dev'"));

    assert_eq!(common::read_file(dir.path(), "1.txt"), "one");

    Ok(())
}

#[rstest]
fn checking_out_the_current_branch_is_a_noop(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(init_repository_dir.path(), &["checkout", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already on branch 'main'"));

    Ok(())
}

#[rstest]
fn staged_changes_block_the_switch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    common::write_file(dir.path(), "wip.txt", "work in progress");
    common::run_jot_command(dir.path(), &["add", "wip.txt"])
        .assert()
        .success();

    common::run_jot_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: You have uncommitted changes"));

    // still on main
    let head = common::read_file(dir.path(), ".jot/HEAD");
    assert_eq!(head.trim(), "ref: refs/heads/main");

    Ok(())
}

#[rstest]
fn checking_out_a_missing_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(init_repository_dir.path(), &["checkout", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Branch 'ghost' does not exist"));

    Ok(())
}

#[rstest]
fn checking_out_an_unborn_branch_only_moves_head(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    common::write_file(repository_dir.path(), "loose.txt", "untouched");

    common::run_jot_command(repository_dir.path(), &["checkout", "-b", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'dev' (empty branch)"));

    assert_eq!(common::read_file(repository_dir.path(), "loose.txt"), "untouched");

    Ok(())
}

#[rstest]
fn checkout_applies_deletion_entries_from_the_target_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::run_jot_command(dir.path(), &["checkout", "-b", "pruned"])
        .assert()
        .success();
    common::run_jot_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();
    common::run_jot_command(dir.path(), &["commit", "-m", "drop one"])
        .assert()
        .success();

    common::run_jot_command(dir.path(), &["checkout", "main"])
        .assert()
        .success();
    assert_eq!(common::read_file(dir.path(), "1.txt"), "one");

    common::run_jot_command(dir.path(), &["checkout", "pruned"])
        .assert()
        .success();
    assert!(!dir.path().join("1.txt").exists());

    Ok(())
}
