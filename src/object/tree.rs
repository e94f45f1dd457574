use std::collections::HashSet;
use std::fmt;

use super::{parse_utils, Id, ID_LEN};

use crate::file_mode::FileMode;
use crate::path_mode::PathMode;
use crate::repo::on_disk::GIT_DIR;
use crate::repo::{Error, Result};

/// One entry of a tree: a file mode, a name within the directory,
/// and the ID of the blob or tree it refers to.
///
/// The mode text is kept exactly as stored, so an entry parsed from a tree
/// re-encodes to the same bytes even when its mode is not canonical.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    mode: FileMode,
    mode_text: Vec<u8>,
    name: Vec<u8>,
    id: Id,
}

impl TreeEntry {
    /// Create a tree entry.
    ///
    /// Fails with `InvalidArgument` if the name is empty, is `.` or `..`,
    /// contains `/` or a NUL byte, or is the reserved repository directory name.
    /// `FileMode::Other` is also rejected since it has no text to write.
    pub fn new<N: Into<Vec<u8>>>(mode: FileMode, name: N, id: Id) -> Result<TreeEntry> {
        let name = name.into();

        let invalid = |reason: &str| {
            Err(Error::InvalidArgument(format!(
                "tree entry name `{}` {}",
                String::from_utf8_lossy(&name),
                reason
            )))
        };

        if name.is_empty() {
            return invalid("is empty");
        }
        if name.contains(&b'/') || name.contains(&0) {
            return invalid("contains a path separator or NUL");
        }
        if name == b"." || name == b".." {
            return invalid("is a relative path component");
        }
        if name == GIT_DIR.as_bytes() {
            return invalid("is reserved");
        }

        let mode_text = match mode.as_octal_str() {
            Some(text) => text.as_bytes().to_vec(),
            None => return invalid("has no recognized file mode"),
        };

        Ok(TreeEntry {
            mode,
            mode_text,
            name,
            id,
        })
    }

    /// Return the entry's file mode.
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// Return the mode text exactly as it appears in the tree payload.
    pub fn mode_text(&self) -> &[u8] {
        &self.mode_text
    }

    /// Return the entry's name as raw bytes.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Return the entry's name, replacing invalid UTF-8 sequences.
    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    /// Return the ID of the blob or tree this entry refers to.
    pub fn id(&self) -> Id {
        self.id
    }

    fn path_mode(&self) -> PathMode<'_> {
        PathMode {
            path: &self.name,
            mode: self.mode,
        }
    }

    fn write_to(&self, payload: &mut Vec<u8>) {
        payload.extend_from_slice(&self.mode_text);
        payload.push(b' ');
        payload.extend_from_slice(&self.name);
        payload.push(0);
        payload.extend_from_slice(self.id.as_raw());
    }
}

impl fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.mode {
            FileMode::Tree => "tree",
            FileMode::Submodule => "commit",
            _ => "blob",
        };

        write!(
            f,
            "{:0>6} {} {}\t{}",
            String::from_utf8_lossy(&self.mode_text),
            kind,
            self.id,
            self.name_lossy()
        )
    }
}

/// The decoded payload of a tree object.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Create a tree from entries in any order.
    ///
    /// Entries are sorted by name, with tree names compared as if they
    /// ended in `/`. Fails with `InvalidArgument` if two entries share a name.
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Tree> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name.as_slice()) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate tree entry `{}`",
                    entry.name_lossy()
                )));
            }
        }

        entries.sort_by(|a, b| a.path_mode().cmp(&b.path_mode()));
        Ok(Tree { entries })
    }

    /// Parse a tree payload into its entries, in stored order.
    ///
    /// Each entry is `"{mode} {name}\0"` followed by exactly 20 raw ID bytes.
    /// The mode is whatever text precedes the first space; modes outside the
    /// known set parse as `FileMode::Other`. Fails with `MalformedObject` if
    /// a delimiter is missing or fewer than 20 bytes remain where an ID is
    /// expected.
    pub fn parse(payload: &[u8]) -> Result<Tree> {
        let mut entries = Vec::new();
        let mut rest = payload;

        while !rest.is_empty() {
            let (mode, after_mode) = parse_utils::split_once(rest, b' ').ok_or_else(|| {
                malformed(payload, rest, "missing space after mode")
            })?;

            let (name, after_name) = parse_utils::split_once(after_mode, 0)
                .ok_or_else(|| malformed(payload, rest, "missing NUL after name"))?;

            if after_name.len() < ID_LEN {
                return Err(malformed(payload, rest, "truncated object ID"));
            }

            let (id, remaining) = after_name.split_at(ID_LEN);
            let id = Id::from_raw(id).map_err(|e| malformed(payload, rest, &e.to_string()))?;

            entries.push(TreeEntry {
                mode: FileMode::from_octal_slice(mode),
                mode_text: mode.to_vec(),
                name: name.to_vec(),
                id,
            });
            rest = remaining;
        }

        Ok(Tree { entries })
    }

    /// Encode the entries as a tree payload.
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        for entry in &self.entries {
            entry.write_to(&mut payload);
        }
        payload
    }

    /// Return the entries in order.
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Consume the tree, returning its entries.
    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn malformed(payload: &[u8], rest: &[u8], reason: &str) -> Error {
    let offset = payload.len() - rest.len();
    Error::MalformedObject(format!("tree entry at byte {}: {}", offset, reason))
}
