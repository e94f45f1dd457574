//! A repository that stores content on the local file system.
//!
//! The layout is a subset of command-line git's `.git` directory:
//!
//! ```text
//! <work_dir>/.git/
//!   HEAD                      ref: refs/heads/main
//!   objects/<2-hex>/<38-hex>  one zlib-compressed object per file
//!   refs/
//!   config.toml               optional, see `objstore::config`
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{Error, Repo, Result};

use crate::compression;
use crate::config::{Config, CONFIG_FILE};
use crate::object::{self, Id, Object};

/// Name of the repository directory within the working directory.
///
/// The tree builder never descends into a directory with this name, and
/// tree entries may not use it.
pub const GIT_DIR: &str = ".git";

/// Symbolic ref written to `HEAD` for a new repository.
pub const HEAD_TXT: &str = "ref: refs/heads/main\n";

/// Whether `init` created a new repository or found one already present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InitOutcome {
    Created,
    AlreadyInitialized,
}

/// Implementation of `Repo` that stores content on the local file system.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
    config: Config,
}

impl OnDisk {
    /// Open an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path. Use `init` to create an empty on-disk repository if
    /// necessary. Configuration is read from `.git/config.toml` if present.
    pub fn new(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(GIT_DIR);
        if !git_dir.is_dir() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        let config = Config::load(git_dir.join(CONFIG_FILE))?;

        Ok(OnDisk {
            work_dir,
            git_dir,
            config,
        })
    }

    /// Creates a new, empty repository on the local file system.
    ///
    /// Each piece of the layout is created only if it is absent, so running
    /// this against an existing (or partially created) repository fills in
    /// what is missing and reports `AlreadyInitialized`.
    ///
    /// Analogous to [`git init`](https://git-scm.com/docs/git-init).
    pub fn init(work_dir: &Path) -> Result<(Self, InitOutcome)> {
        let git_dir = work_dir.join(GIT_DIR);

        let outcome = if git_dir.is_dir() {
            InitOutcome::AlreadyInitialized
        } else {
            fs::create_dir_all(&git_dir)?;
            InitOutcome::Created
        };

        create_head(&git_dir)?;
        create_dir_if_missing(&git_dir.join("objects"))?;
        create_dir_if_missing(&git_dir.join("refs"))?;

        info!(git_dir = %git_dir.display(), ?outcome, "initialized repository");

        let config = Config::load(git_dir.join(CONFIG_FILE))?;

        let repo = OnDisk {
            work_dir: work_dir.to_path_buf(),
            git_dir,
            config,
        };

        Ok((repo, outcome))
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the configuration loaded with this repo.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Return the path at which the object with this ID is (or would be) stored.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let (dir, file_name) = id.loose_object_path();
        self.git_dir.join("objects").join(dir).join(file_name)
    }
}

impl Repo for OnDisk {
    fn put_loose_object(&mut self, object: &Object) -> Result<Id> {
        let id = object.id();
        let (dir_name, file_name) = id.loose_object_path();
        let dir = self.git_dir.join("objects").join(dir_name);
        let path = dir.join(file_name);

        if path.exists() {
            debug!(%id, kind = %object.kind(), "object already stored");
            return Ok(id);
        }

        fs::create_dir_all(&dir)?;

        let canonical = object.to_canonical_bytes()?;
        let compressed = compression::compress(&canonical)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(&compressed)?;
        temp.persist(&path).map_err(|e| e.error)?;

        debug!(%id, kind = %object.kind(), size = object.len(), "stored object");
        Ok(id)
    }

    fn get(&self, id: &Id) -> Result<Vec<u8>> {
        let path = self.object_path(id);

        let compressed = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(*id));
            }
            Err(e) => return Err(e.into()),
        };

        let corrupt = |reason: String| Error::CorruptObject { id: *id, reason };

        let canonical =
            compression::decompress(&compressed).map_err(|e| corrupt(e.to_string()))?;

        if let Err(e) = object::decode(&canonical) {
            return Err(corrupt(e.to_string()));
        }

        let actual = Id::digest(&canonical);
        if actual != *id {
            return Err(corrupt(format!("content hashes to {}", actual)));
        }

        debug!(%id, size = canonical.len(), "read object");
        Ok(canonical)
    }

    fn contains(&self, id: &Id) -> Result<bool> {
        Ok(self.object_path(id).is_file())
    }
}

fn create_head(git_dir: &Path) -> Result<()> {
    let head_path = git_dir.join("HEAD");
    if head_path.exists() {
        return Ok(());
    }

    fs::write(head_path, HEAD_TXT).map_err(|e| e.into())
}

fn create_dir_if_missing(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| e.into())
}
