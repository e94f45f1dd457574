use std::path::PathBuf;

use thiserror::Error;

use crate::object::{Id, ParseIdError};

/// Describes the potential error conditions that might arise from `Repo` operations.
///
/// Nothing is retried or recovered locally; every condition is surfaced
/// to the caller with its own message.
#[derive(Debug, Error)]
pub enum Error {
    /// No object with this ID is stored.
    #[error("object not found: {0}")]
    ObjectNotFound(Id),

    /// The stored bytes could not be decompressed, lack a valid header,
    /// or do not hash to the expected ID.
    #[error("corrupt object {id}: {reason}")]
    CorruptObject { id: Id, reason: String },

    /// A payload violates the grammar of its object kind.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// A textual object ID could not be parsed.
    #[error("invalid object ID: {0}")]
    InvalidDigestFormat(#[from] ParseIdError),

    #[error("I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),

    /// A caller passed a value that violates an operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("work dir doesn't exist: {}", .0.display())]
    WorkDirDoesntExist(PathBuf),

    #[error("not a repository (missing {})", .0.display())]
    GitDirDoesntExist(PathBuf),
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
