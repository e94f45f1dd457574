use std::path::Path;

use objstore::repo::{on_disk::OnDisk, Result};

use crate::App;

// Open the repository for the directory named by `-C`, or the current directory.
//
// Only the simplest case is handled: a `.git` directory directly within
// that directory. Parent directories are not searched.
pub(crate) fn from_app(app: &App) -> Result<OnDisk> {
    from_path(app.base_dir())
}

pub(crate) fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDisk> {
    OnDisk::new(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    use objstore::repo::Error;

    #[test]
    fn simple_case() {
        let temp = tempfile::tempdir().unwrap();
        OnDisk::init(temp.path()).unwrap();

        let repo = from_path(temp.path()).unwrap();
        assert_eq!(repo.work_dir(), temp.path());
    }

    #[test]
    fn work_dir_doesnt_exist() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nope");

        match from_path(&path) {
            Err(Error::WorkDirDoesntExist(err_path)) => assert_eq!(err_path, path),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn git_dir_doesnt_exist() {
        let temp = tempfile::tempdir().unwrap();

        match from_path(temp.path()) {
            Err(Error::GitDirDoesntExist(err_path)) => {
                assert_eq!(err_path, temp.path().join(".git"))
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }
}
