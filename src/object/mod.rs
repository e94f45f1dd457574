//! Represents the concept of an "object" which is a tuple of
//! object kind and binary data identified by the hash of the binary data.
//!
//! The canonical encoding of every object is `"{kind} {size}\0{payload}"`
//! and the object's [`Id`] is the SHA-1 digest of exactly those bytes.

use std::io::{self, Read, Write};

use sha1::{Digest, Sha1};

use crate::repo::{Error, Result};

mod attribution;
pub use attribution::{Attribution, MAX_TZ_OFFSET, MIN_TZ_OFFSET};

mod commit;
pub use commit::Commit;

mod content_source;
pub use content_source::{ContentSource, ContentSourceOpenResult, ContentSourceResult};

mod file_content_source;
pub use file_content_source::FileContentSource;

mod id;
pub use id::{Id, ParseIdError, ID_LEN};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

mod tree;
pub use tree::{Tree, TreeEntry};

/// Describes a single object stored (or about to be stored) in a repository.
///
/// The ID is computed when the object is constructed, by streaming the
/// canonical header and the content through SHA-1.
pub struct Object {
    id: Id,
    kind: Kind,
    content_source: Box<dyn ContentSource>,
}

impl Object {
    /// Create a new Object and compute its ID.
    ///
    /// This is functionally equivalent to
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object)
    /// without the `-w` option that would write the object to the repo.
    pub fn new(kind: Kind, content_source: Box<dyn ContentSource>) -> ContentSourceResult<Object> {
        let mut hasher = Sha1::new();
        hasher.update(header(kind, content_source.len()));

        {
            let mut reader = content_source.open()?;
            let mut buf = [0; 8192];

            loop {
                let n = reader.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
            }
        }

        Ok(Object {
            id: Id::from_hasher(hasher),
            kind,
            content_source,
        })
    }

    /// Return the ID of the object.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the size (in bytes) of the object's payload.
    pub fn len(&self) -> usize {
        self.content_source.len()
    }

    /// Returns true if the object's payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a `BufRead` struct which can be used for reading the payload.
    pub fn open(&self) -> ContentSourceOpenResult<'_> {
        self.content_source.open()
    }

    /// Write the canonical encoding (header and payload) to `w`.
    ///
    /// Fails with `InvalidData` if the content source yields a different
    /// number of bytes than it reported, as happens when a file changes
    /// between hashing and writing.
    pub fn write_canonical<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&header(self.kind, self.len()))?;

        let mut reader = self.open()?;
        let copied = io::copy(&mut reader, w)?;

        if copied as usize != self.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "content changed while reading: expected {} bytes, read {}",
                    self.len(),
                    copied
                ),
            ));
        }

        Ok(())
    }

    /// Return the canonical encoding as a byte vector.
    pub fn to_canonical_bytes(&self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.len() + 32);
        self.write_canonical(&mut bytes)?;
        Ok(bytes)
    }
}

fn header(kind: Kind, size: usize) -> Vec<u8> {
    format!("{} {}\0", kind, size).into_bytes()
}

/// Produce the canonical encoding `"{kind} {size}\0{payload}"`.
pub fn encode(kind: Kind, payload: &[u8]) -> Vec<u8> {
    let mut bytes = header(kind, payload.len());
    bytes.extend_from_slice(payload);
    bytes
}

/// Split a canonical encoding into its kind and payload.
///
/// Fails with `MalformedObject` if the header is missing, the kind is not
/// recognized, the size is not a plain decimal number, or the size
/// disagrees with the payload length. The payload itself is not checked.
pub fn decode(bytes: &[u8]) -> Result<(Kind, &[u8])> {
    let (header, payload) = parse_utils::split_once(bytes, 0)
        .ok_or_else(|| Error::MalformedObject("missing header terminator".to_string()))?;

    let (kind, size) = parse_utils::split_once(header, b' ')
        .ok_or_else(|| Error::MalformedObject("missing size in header".to_string()))?;

    let kind = Kind::from_bytes(kind).ok_or_else(|| {
        Error::MalformedObject(format!(
            "unknown object kind `{}`",
            String::from_utf8_lossy(kind)
        ))
    })?;

    let size = parse_utils::parse_decimal(size).ok_or_else(|| {
        Error::MalformedObject(format!(
            "invalid object size `{}`",
            String::from_utf8_lossy(size)
        ))
    })?;

    if size != payload.len() {
        return Err(Error::MalformedObject(format!(
            "{} declares {} bytes but has {}",
            kind,
            size,
            payload.len()
        )));
    }

    Ok((kind, payload))
}
