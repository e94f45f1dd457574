use std::ffi::OsStr;
use std::fs::{self, FileType};
use std::path::Path;

use tracing::{debug, info, instrument, trace};

use super::{on_disk::GIT_DIR, Repo, Result};

use crate::config::SymlinkPolicy;
use crate::file_mode::FileMode;
use crate::object::{Id, Kind, Object, Tree, TreeEntry};

/// Writes a directory on disk into a repository as a tree of tree and blob objects.
///
/// The walk is depth-first and post-order: every file and subdirectory is
/// stored before the tree that refers to it. Each directory level builds
/// and returns its own entry list; nothing is shared between recursive calls.
/// Entries named `.git` are skipped at every level.
///
/// Any I/O error (unreadable file, entry vanishing mid-walk, broken symlink
/// under `SymlinkPolicy::Follow`) aborts the whole build. Objects already
/// written stay in the repository, but no root ID is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeBuilder {
    symlinks: SymlinkPolicy,
}

impl TreeBuilder {
    pub fn new(symlinks: SymlinkPolicy) -> TreeBuilder {
        TreeBuilder { symlinks }
    }

    /// Store `dir` and everything beneath it, returning the root tree's ID.
    #[instrument(skip(self, repo), fields(dir = %dir.display()))]
    pub fn build<R: Repo + ?Sized>(&self, repo: &mut R, dir: &Path) -> Result<Id> {
        let id = self.write_dir(repo, dir)?;
        info!(%id, "wrote tree");
        Ok(id)
    }

    fn write_dir<R: Repo + ?Sized>(&self, repo: &mut R, dir: &Path) -> Result<Id> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(dir)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name();

            if name == GIT_DIR {
                trace!(dir = %dir.display(), "skipping repository directory");
                continue;
            }

            let path = dir_entry.path();
            let (mode, id) = self.write_entry(repo, &path, dir_entry.file_type()?)?;
            entries.push(TreeEntry::new(mode, name_bytes(&name)?, id)?);
        }

        let tree = Tree::new(entries)?;
        let object = Object::new(Kind::Tree, Box::new(tree.to_payload()))?;
        let id = repo.put_loose_object(&object)?;

        debug!(%id, dir = %dir.display(), entries = tree.len(), "wrote directory");
        Ok(id)
    }

    fn write_entry<R: Repo + ?Sized>(
        &self,
        repo: &mut R,
        path: &Path,
        file_type: FileType,
    ) -> Result<(FileMode, Id)> {
        if file_type.is_dir() {
            return Ok((FileMode::Tree, self.write_dir(repo, path)?));
        }

        if file_type.is_symlink() {
            match self.symlinks {
                SymlinkPolicy::Record => {
                    let target = fs::read_link(path)?;
                    let target = name_bytes(target.as_os_str())?;
                    let object = Object::new(Kind::Blob, Box::new(target))?;
                    return Ok((FileMode::SymbolicLink, repo.put_loose_object(&object)?));
                }
                SymlinkPolicy::Follow => {
                    if fs::metadata(path)?.is_dir() {
                        return Ok((FileMode::Tree, self.write_dir(repo, path)?));
                    }
                }
            }
        }

        Ok((FileMode::Normal, repo.store_blob(path)?))
    }
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(name.as_bytes().to_vec())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Result<Vec<u8>> {
    name.to_str()
        .map(|s| s.as_bytes().to_vec())
        .ok_or_else(|| {
            super::Error::InvalidArgument(format!(
                "path `{}` is not valid Unicode",
                name.to_string_lossy()
            ))
        })
}
