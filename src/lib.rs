//! A minimal content-addressable object store using git's loose-object format.
//!
//! Blobs, trees, and commits are encoded as `"{kind} {size}\0{payload}"`,
//! identified by the SHA-1 digest of that encoding, and stored
//! zlib-compressed under `.git/objects/<2-hex>/<38-hex>`. Because the
//! formats match git's, IDs agree with those computed by command-line git.
//!
//! ```no_run
//! use objstore::clock::SystemClock;
//! use objstore::repo::{on_disk::OnDisk, CommitWriter, Repo, TreeBuilder};
//!
//! # fn main() -> objstore::repo::Result<()> {
//! let work_dir = std::path::Path::new("project");
//! let (mut repo, _) = OnDisk::init(work_dir)?;
//!
//! let tree = TreeBuilder::new(repo.config().tree.symlinks).build(&mut repo, work_dir)?;
//! let writer = CommitWriter::new(repo.config(), SystemClock);
//! let commit = writer.write(&mut repo, &tree.to_hex(), None, "initial")?;
//!
//! println!("{}", repo.read_commit(&commit)?.message());
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod compression;
pub mod config;
pub mod file_mode;
pub mod object;
mod path_mode;
pub mod repo;

#[cfg(test)]
pub(crate) mod test_support;
