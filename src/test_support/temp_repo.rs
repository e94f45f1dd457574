use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::repo::on_disk::{InitOutcome, OnDisk};

/// A `TempRepo` creates a temporary, empty on-disk repository.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub(crate) struct TempRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: TempDir,
    repo: OnDisk,
}

impl TempRepo {
    // Create a new repo in a temporary directory.
    // This directory will be deleted when the struct is dropped.
    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let (repo, outcome) = OnDisk::init(tempdir.path()).unwrap();
        assert_eq!(outcome, InitOutcome::Created);

        TempRepo { tempdir, repo }
    }

    pub fn work_dir(&self) -> &Path {
        self.repo.work_dir()
    }

    pub fn repo(&self) -> &OnDisk {
        &self.repo
    }

    pub fn repo_mut(&mut self) -> &mut OnDisk {
        &mut self.repo
    }
}

// Write `content` to `rel_path` beneath `dir`, creating parent directories.
pub(crate) fn write_file<C: AsRef<[u8]>>(dir: &Path, rel_path: &str, content: C) {
    let path = dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_on_drop() {
        let path = {
            let tr = TempRepo::new();
            let path = tr.work_dir().to_path_buf();
            assert!(path.join(".git").is_dir());
            path
        };

        assert!(!path.is_dir());
    }

    #[test]
    fn write_nested_file() {
        let tr = TempRepo::new();
        write_file(tr.work_dir(), "a/b/c.txt", "hi");
        assert_eq!(fs::read(tr.work_dir().join("a/b/c.txt")).unwrap(), b"hi");
    }
}
