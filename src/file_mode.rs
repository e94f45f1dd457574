use std::fmt::{self, Display, Formatter};

/// Describes the file type of a tree entry.
///
/// Trees use a variation on the Unix file permissions flags to denote an
/// entry's intended type on disk. The following values are recognized:
///
/// * `100644` - normal file
/// * `100755` - executable file
/// * `120000` - symbolic link
/// * `40000` - tree (subdirectory)
/// * `160000` - submodule (aka gitlink)
///
/// Anything else found in a stored tree (historical modes such as `100664`,
/// or text that is not octal at all) is `Other`. The tree builder only
/// produces `Normal`, `SymbolicLink` and `Tree`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum FileMode {
    Normal,
    Executable,
    SymbolicLink,
    Tree,
    Submodule,
    Other,
}

impl FileMode {
    /// Classify the mode text found in a tree entry by its octal value.
    ///
    /// Leading zeros are tolerated, so `040000` is a `Tree`.
    pub fn from_octal_slice(mode: &[u8]) -> FileMode {
        if mode.is_empty() || !mode.iter().all(|b| (b'0'..=b'7').contains(b)) {
            return FileMode::Other;
        }

        let value = std::str::from_utf8(mode)
            .ok()
            .and_then(|s| u32::from_str_radix(s, 8).ok());

        match value {
            Some(0o100644) => FileMode::Normal,
            Some(0o100755) => FileMode::Executable,
            Some(0o120000) => FileMode::SymbolicLink,
            Some(0o40000) => FileMode::Tree,
            Some(0o160000) => FileMode::Submodule,
            _ => FileMode::Other,
        }
    }

    /// Convert to the canonical octal text written into a tree entry.
    ///
    /// `Other` has no canonical text and returns `None`.
    pub fn as_octal_str(self) -> Option<&'static str> {
        match self {
            FileMode::Normal => Some("100644"),
            FileMode::Executable => Some("100755"),
            FileMode::SymbolicLink => Some("120000"),
            FileMode::Tree => Some("40000"),
            FileMode::Submodule => Some("160000"),
            FileMode::Other => None,
        }
    }

    /// Returns true if this entry refers to a tree object.
    pub fn is_tree(self) -> bool {
        self == FileMode::Tree
    }
}

impl Display for FileMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_octal_str().unwrap_or("other"))
    }
}
