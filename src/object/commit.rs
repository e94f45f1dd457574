use super::{parse_utils, Attribution, Id};

use crate::repo::{Error, Result};

/// The decoded payload of a commit object.
///
/// Renders as:
///
/// ```text
/// tree {hex}
/// parent {hex}        (zero or more)
/// author {name} <{email}> {timestamp} {tz}
/// committer {name} <{email}> {timestamp} {tz}
///
/// {message}
/// ```
///
/// The message is always newline-terminated in the payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    tree: Id,
    parents: Vec<Id>,
    author: Attribution,
    committer: Attribution,
    message: String,
}

impl Commit {
    /// Create a commit description.
    pub fn new(
        tree: Id,
        parents: Vec<Id>,
        author: Attribution,
        committer: Attribution,
        message: &str,
    ) -> Commit {
        let mut message = message.to_string();
        if !message.ends_with('\n') {
            message.push('\n');
        }

        Commit {
            tree,
            parents,
            author,
            committer,
            message,
        }
    }

    /// Return the ID of the root tree.
    pub fn tree(&self) -> Id {
        self.tree
    }

    /// Return the parent commit IDs.
    pub fn parents(&self) -> &[Id] {
        &self.parents
    }

    /// Return the author attribution.
    pub fn author(&self) -> &Attribution {
        &self.author
    }

    /// Return the committer attribution.
    pub fn committer(&self) -> &Attribution {
        &self.committer
    }

    /// Return the message (newline-terminated).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the commit payload.
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = format!("tree {}\n", self.tree);
        for parent in &self.parents {
            payload.push_str(&format!("parent {}\n", parent));
        }
        payload.push_str(&format!("author {}\n", self.author));
        payload.push_str(&format!("committer {}\n", self.committer));
        payload.push('\n');
        payload.push_str(&self.message);
        payload.into_bytes()
    }

    /// Parse a commit payload.
    ///
    /// Fails with `MalformedObject` if the header lines are missing, out of
    /// order, or unparseable, or if the blank line before the message is absent.
    pub fn parse(payload: &[u8]) -> Result<Commit> {
        let split = payload
            .windows(2)
            .position(|w| w == b"\n\n")
            .ok_or_else(|| malformed("missing blank line before message"))?;

        let message = std::str::from_utf8(&payload[split + 2..])
            .map_err(|_| malformed("message is not valid UTF-8"))?;

        let mut lines = payload[..split].split(|c| *c == b'\n');

        let tree = lines
            .next()
            .and_then(|line| parse_utils::header(line, b"tree"))
            .ok_or_else(|| malformed("missing tree line"))?;
        let tree = Id::from_hex(tree).map_err(|e| malformed(&format!("tree: {}", e)))?;

        let mut parents = Vec::new();
        let mut line = lines.next().ok_or_else(|| malformed("missing author line"))?;
        while let Some(parent) = parse_utils::header(line, b"parent") {
            parents.push(Id::from_hex(parent).map_err(|e| malformed(&format!("parent: {}", e)))?);
            line = lines.next().ok_or_else(|| malformed("missing author line"))?;
        }

        let author = parse_utils::header(line, b"author")
            .and_then(Attribution::parse)
            .ok_or_else(|| malformed("invalid author line"))?;

        let committer = lines
            .next()
            .and_then(|line| parse_utils::header(line, b"committer"))
            .and_then(Attribution::parse)
            .ok_or_else(|| malformed("invalid committer line"))?;

        if lines.next().is_some() {
            return Err(malformed("unexpected header after committer"));
        }

        Ok(Commit {
            tree,
            parents,
            author,
            committer,
            message: message.to_string(),
        })
    }
}

fn malformed(reason: &str) -> Error {
    Error::MalformedObject(format!("commit: {}", reason))
}
