use std::{fs, path::Path};

use assert_cmd::Command;

// Build a command that runs the objstore binary against `dir`.
pub fn objstore(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("objstore").unwrap();
    cmd.arg("-C").arg(dir);
    cmd
}

// Run objstore against `dir`, asserting success, and return trimmed stdout.
#[allow(dead_code)]
pub fn objstore_stdout(dir: &Path, args: &[&str]) -> String {
    let output = objstore(dir).args(args).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    stdout.trim_end().to_string()
}

// Write each `(relative path, content)` pair beneath `dir`, in the given order.
#[allow(dead_code)]
pub fn populate(dir: &Path, files: &[(&str, &str)]) {
    for (rel_path, content) in files {
        let path = dir.join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

// Populate two fresh repositories with the same files (one in reverse order),
// run `op` in each, and assert that their object databases are identical.
#[allow(dead_code)]
pub fn compare_stores<F: Fn(&Path)>(files: &[(&str, &str)], op: F) {
    let first = tempfile::tempdir().unwrap();
    objstore(first.path()).arg("init").assert().success();
    populate(first.path(), files);
    op(first.path());

    let reversed: Vec<(&str, &str)> = files.iter().rev().copied().collect();
    let second = tempfile::tempdir().unwrap();
    objstore(second.path()).arg("init").assert().success();
    populate(second.path(), &reversed);
    op(second.path());

    if dir_diff::is_different(first.path(), second.path()).unwrap() {
        panic!(
            "Directories differ:\n\n  first: {}\n  second: {}\n\n",
            first.path().display(),
            second.path().display()
        );
    }
}
