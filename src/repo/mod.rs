//! Represents an abstract object repository.
//!
//! ## Design Goals
//!
//! Objects may be stored by different mechanisms. The crate includes support
//! for local on-disk repositories (see `objstore::repo::on_disk`) using the
//! same loose object layout as command-line git.

use std::path::Path;

use tracing::debug;

use crate::object::{self, Commit, FileContentSource, Id, Kind, Object, Tree};

mod commit_writer;
pub use commit_writer::CommitWriter;

mod error;
pub use error::{Error, Result};

pub mod on_disk;

mod tree_builder;
pub use tree_builder::TreeBuilder;

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and retrieving objects by ID.
///
/// The required methods on this trait are the storage primitives. The
/// provided methods build the blob, tree, and commit operations on top of
/// them, regardless of storage mechanism.
pub trait Repo {
    /// Store an object, returning its ID.
    ///
    /// Storing an object that is already present is a no-op.
    fn put_loose_object(&mut self, object: &Object) -> Result<Id>;

    /// Retrieve the canonical encoding (header and payload) of an object.
    ///
    /// Fails with `ObjectNotFound` if no such object is stored and with
    /// `CorruptObject` if the stored bytes are unreadable, lack a valid
    /// header, or don't hash to `id`.
    fn get(&self, id: &Id) -> Result<Vec<u8>>;

    /// Returns true if an object with this ID is stored.
    fn contains(&self, id: &Id) -> Result<bool>;

    /// Store an object given its canonical encoding, returning its ID.
    ///
    /// Fails with `MalformedObject` if `canonical` has no valid header.
    fn put(&mut self, canonical: &[u8]) -> Result<Id> {
        let (kind, payload) = object::decode(canonical)?;
        let object = Object::new(kind, Box::new(payload.to_vec()))?;
        self.put_loose_object(&object)
    }

    /// Read an object, returning its kind and payload.
    fn read_object(&self, id: &Id) -> Result<(Kind, Vec<u8>)> {
        let canonical = self.get(id)?;
        let (kind, payload) = object::decode(&canonical).map_err(|e| Error::CorruptObject {
            id: *id,
            reason: e.to_string(),
        })?;
        Ok((kind, payload.to_vec()))
    }

    /// Store the content of a file as a blob.
    ///
    /// The file is streamed rather than loaded whole. It is an `IoFailure`
    /// if `path` is a directory or if the file changes size while it is
    /// being stored.
    fn store_blob(&mut self, path: &Path) -> Result<Id> {
        self.hash_object(path, true)
    }

    /// Compute the blob ID of a file's content, storing it only if `write` is set.
    fn hash_object(&mut self, path: &Path, write: bool) -> Result<Id> {
        let object = Object::new(Kind::Blob, Box::new(FileContentSource::new(path)?))?;

        if write {
            self.put_loose_object(&object)
        } else {
            Ok(object.id())
        }
    }

    /// Read a blob's content.
    ///
    /// Fails with `MalformedObject` if the object is not a blob.
    fn read_blob(&self, id: &Id) -> Result<Vec<u8>> {
        expect_kind(id, self.read_object(id)?, Kind::Blob)
    }

    /// Read and parse a tree.
    fn read_tree(&self, id: &Id) -> Result<Tree> {
        let payload = expect_kind(id, self.read_object(id)?, Kind::Tree)?;
        Tree::parse(&payload)
    }

    /// List the entry names of a tree, in stored order.
    fn list_tree_names(&self, id: &Id) -> Result<Vec<String>> {
        Ok(self
            .read_tree(id)?
            .entries()
            .iter()
            .map(|entry| entry.name_lossy())
            .collect())
    }

    /// Read and parse a commit.
    fn read_commit(&self, id: &Id) -> Result<Commit> {
        let payload = expect_kind(id, self.read_object(id)?, Kind::Commit)?;
        Commit::parse(&payload)
    }
}

fn expect_kind(id: &Id, (kind, payload): (Kind, Vec<u8>), expected: Kind) -> Result<Vec<u8>> {
    if kind == expected {
        Ok(payload)
    } else {
        debug!(%id, %kind, %expected, "object kind mismatch");
        Err(Error::MalformedObject(format!(
            "{} is a {}, not a {}",
            id, kind, expected
        )))
    }
}
