use std::fs::{self, File};
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use super::{ContentSource, ContentSourceOpenResult};

/// Streams a blob's content from a file on disk.
///
/// The length is taken from the file's metadata when the source is created;
/// the bytes are read each time the source is opened. Symbolic links are
/// resolved, so a link to a regular file yields the target's bytes.
///
/// If the file changes size after the source is created, writing the object
/// fails rather than storing bytes that disagree with the ID.
#[derive(Debug)]
pub struct FileContentSource {
    path: PathBuf,
    len: usize,
}

impl FileContentSource {
    /// Prepare to read `path`.
    ///
    /// Fails with `NotFound` if nothing exists there (including a dangling
    /// symbolic link) and with `InvalidInput` if it is a directory.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<FileContentSource> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;

        if metadata.is_dir() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is a directory", path.display()),
            ));
        }

        Ok(FileContentSource {
            path: path.to_path_buf(),
            len: metadata.len() as usize,
        })
    }

    /// Return the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for FileContentSource {
    fn len(&self) -> usize {
        self.len
    }

    fn open(&self) -> ContentSourceOpenResult<'_> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }
}
