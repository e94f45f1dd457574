use std::fs;

use predicates::prelude::*;

mod common;

use common::{compare_stores, objstore, objstore_stdout, populate};

#[test]
fn init_layout() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path();

    objstore(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized empty repository in "));

    assert_eq!(
        fs::read_to_string(dir.join(".git/HEAD")).unwrap(),
        "ref: refs/heads/main\n"
    );
    assert!(dir.join(".git/refs").is_dir());

    let objects_dir = dir.join(".git/objects");
    assert!(objects_dir.is_dir());
    assert_eq!(fs::read_dir(objects_dir).unwrap().count(), 0);

    objstore(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Reinitialized existing repository in "));
}

#[test]
fn hello_world() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path();
    objstore(dir).arg("init").assert().success();
    populate(dir, &[("hello.txt", "world")]);

    let blob = objstore_stdout(dir, &["hash-object", "-w", "hello.txt"]);
    assert_eq!(blob, "04fea06420ca60892f73becee3614f6d023a4b7f");
    assert_eq!(objstore_stdout(dir, &["cat-file", "-p", &blob]), "world");

    let tree = objstore_stdout(dir, &["write-tree"]);
    assert_eq!(tree, "324ec1ee6443d763cf4540e8b6d6fa6ec541b1c7");
    assert_eq!(
        objstore_stdout(dir, &["ls-tree", "--name-only", &tree]),
        "hello.txt"
    );

    let commit = objstore_stdout(dir, &["commit-tree", &tree, "-m", "initial"]);
    assert_eq!(objstore_stdout(dir, &["cat-file", "-t", &commit]), "commit");

    let second = objstore_stdout(dir, &["commit-tree", &tree, "-p", &commit, "-m", "second"]);
    let printed = objstore_stdout(dir, &["cat-file", "-p", &second]);
    assert!(printed.contains(&format!("\nparent {}\n", commit)));
    assert!(printed.contains("\nauthor objstore <objstore@localhost> "));
}

#[test]
fn object_not_found() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path();
    objstore(dir).arg("init").assert().success();

    objstore(dir)
        .args(&["cat-file", "-p", "04fea06420ca60892f73becee3614f6d023a4b7f"])
        .assert()
        .code(1)
        .stderr("ERROR: object not found: 04fea06420ca60892f73becee3614f6d023a4b7f\n");
}

#[test]
fn corrupt_object() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path();
    objstore(dir).arg("init").assert().success();
    populate(dir, &[("hello.txt", "world")]);
    objstore(dir)
        .args(&["hash-object", "-w", "hello.txt"])
        .assert()
        .success();

    let path = dir.join(".git/objects/04/fea06420ca60892f73becee3614f6d023a4b7f");
    let mut compressed = fs::read(&path).unwrap();
    compressed.truncate(compressed.len() - 1);
    fs::write(&path, compressed).unwrap();

    objstore(dir)
        .args(&["cat-file", "-p", "04fea06420ca60892f73becee3614f6d023a4b7f"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "ERROR: corrupt object 04fea06420ca60892f73becee3614f6d023a4b7f: ",
        ));
}

#[test]
fn write_tree_is_deterministic() {
    compare_stores(
        &[
            ("b", "z"),
            ("a.txt", "x"),
            ("a/inner", "y"),
            ("a/deeper/leaf", "leaf"),
            ("empty/.keep", ""),
        ],
        |dir| {
            assert_eq!(
                objstore_stdout(dir, &["write-tree"]).len(),
                40,
                "write-tree should print a single ID"
            );
        },
    );
}
