use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::{init_repository_dir, repository_dir};

#[rstest]
fn add_single_file_stages_a_new_entry(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    common::write_file(repository_dir.path(), "x.txt", "hello");

    common::run_jot_command(repository_dir.path(), &["add", "x.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staged new file: 'x.txt'"));

    let index = common::read_file(repository_dir.path(), ".jot/index");
    assert!(index.contains("x.txt"));
    assert!(index.contains("\"hash\""));

    // the staged blob is in the object store, content-addressed
    let objects = common::list_objects(repository_dir.path());
    assert_eq!(objects.len(), 1);
    assert_eq!(common::read_object(repository_dir.path(), &objects[0]), "hello");

    Ok(())
}

#[rstest]
fn identical_content_is_stored_once(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    common::write_file(repository_dir.path(), "a.txt", "same bytes");
    common::write_file(repository_dir.path(), "b.txt", "same bytes");

    common::run_jot_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    common::run_jot_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    assert_eq!(common::list_objects(repository_dir.path()).len(), 1);

    Ok(())
}

#[rstest]
fn add_all_sweeps_modified_deleted_and_untracked(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    common::write_file(dir.path(), "1.txt", "one, edited");
    common::delete_path(&dir.path().join("a/2.txt"));
    common::write_file(dir.path(), "new.txt", "brand new");

    common::run_jot_command(dir.path(), &["add", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staged modified: '1.txt'"))
        .stdout(predicate::str::contains("Staged deletion of 'a/2.txt'"))
        .stdout(predicate::str::contains("Staged new file: 'new.txt'"));

    Ok(())
}

#[rstest]
fn add_all_with_a_clean_tree_reports_nothing_to_add(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(init_repository_dir.path(), &["add", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to add"));

    Ok(())
}

#[rstest]
fn adding_a_missing_untracked_path_reports_no_match(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    common::run_jot_command(repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: 'ghost.txt' did not match any files",
        ));

    Ok(())
}

#[rstest]
fn adding_a_missing_tracked_file_stages_its_deletion(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    common::delete_path(&dir.path().join("1.txt"));

    common::run_jot_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staged deletion of '1.txt'"));

    let index = common::read_file(dir.path(), ".jot/index");
    assert!(index.contains("\"deleted\":true"));

    Ok(())
}

#[rstest]
fn ignored_paths_are_not_staged(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    common::write_file(repository_dir.path(), "notes.swp", "swapfile");

    common::run_jot_command(repository_dir.path(), &["add", "notes.swp"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ignoring 'notes.swp' (matches ignore pattern)",
        ));

    let index = common::read_file(repository_dir.path(), ".jot/index");
    assert!(!index.contains("notes.swp"));

    Ok(())
}

#[rstest]
fn binary_files_are_staged_with_the_binary_flag(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    common::run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    common::write_binary_file(repository_dir.path(), "blob.bin", &[0xff, 0x00, 0x90, 0x01]);

    common::run_jot_command(repository_dir.path(), &["add", "blob.bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staged new file: 'blob.bin'"));

    let index = common::read_file(repository_dir.path(), ".jot/index");
    assert!(index.contains("\"binary\":true"));

    // the object file holds the hex encoding of the raw bytes
    let objects = common::list_objects(repository_dir.path());
    assert_eq!(common::read_object(repository_dir.path(), &objects[0]), "ff009001");

    Ok(())
}
