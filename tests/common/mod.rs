#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with three committed files: `1.txt`, `a/2.txt`, `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(repository_dir.path(), "1.txt", "one");
    write_file(repository_dir.path(), "a/2.txt", "two");
    write_file(repository_dir.path(), "a/b/3.txt", "three");

    run_jot_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["commit", "-m", "Initial commit"])
        .assert()
        .success();

    repository_dir
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.env("NO_PAGER", "1");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn write_file(dir: &Path, relative: &str, content: &str) {
    write_binary_file(dir, relative, content.as_bytes());
}

pub fn write_binary_file(dir: &Path, relative: &str, content: &[u8]) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

pub fn read_file(dir: &Path, relative: &str) -> String {
    std::fs::read_to_string(dir.join(relative))
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", relative, e))
}

pub fn delete_path(path: &Path) {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
    .unwrap_or_else(|e| panic!("Failed to delete {:?}: {}", path, e));
}

/// Resolve the commit digest HEAD points at, through the branch ref when
/// attached
pub fn head_commit_sha(dir: &Path) -> String {
    let head_content = std::fs::read_to_string(dir.join(".jot/HEAD")).expect("Failed to read HEAD");

    match head_content.trim().strip_prefix("ref: ") {
        Some(ref_path) => std::fs::read_to_string(dir.join(".jot").join(ref_path.trim()))
            .expect("Failed to read branch ref")
            .trim()
            .to_string(),
        None => head_content.trim().to_string(),
    }
}

pub fn branch_sha(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(dir.join(".jot/refs/heads").join(branch))
        .expect("Failed to read branch ref")
        .trim()
        .to_string()
}

pub fn read_object(dir: &Path, sha: &str) -> String {
    std::fs::read_to_string(dir.join(".jot/objects").join(sha)).expect("Failed to read object")
}

pub fn list_objects(dir: &Path) -> Vec<String> {
    let mut objects = std::fs::read_dir(dir.join(".jot/objects"))
        .expect("Failed to list objects")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    objects.sort();
    objects
}
