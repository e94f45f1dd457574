use std::io::{BufRead, Cursor};

/// Result type for opening a content source.
pub type ContentSourceOpenResult<'a> = std::io::Result<Box<dyn BufRead + 'a>>;

/// Result type for operations that read from a content source.
pub type ContentSourceResult<T> = std::io::Result<T>;

/// Trait used for reading object payloads from various sources.
///
/// An object's ID is computed by streaming its content through SHA-1,
/// so a content source may be opened more than once.
pub trait ContentSource {
    /// Returns the length (in bytes) of the content.
    fn len(&self) -> usize;

    /// Returns true if the content is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a `BufRead` struct which can be used for reading the content.
    fn open(&self) -> ContentSourceOpenResult<'_>;
}

impl ContentSource for Vec<u8> {
    fn len(&self) -> usize {
        self.len()
    }

    fn open(&self) -> ContentSourceOpenResult<'_> {
        Ok(Box::new(Cursor::new(self.as_slice())))
    }
}

impl ContentSource for String {
    fn len(&self) -> usize {
        self.len()
    }

    fn open(&self) -> ContentSourceOpenResult<'_> {
        Ok(Box::new(Cursor::new(self.as_bytes())))
    }
}
