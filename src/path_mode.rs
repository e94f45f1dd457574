use std::cmp::{self, Ordering};

use crate::file_mode::FileMode;

/// Represents the tuple of tree entry name (an uninterpreted sequence of
/// bytes, not necessarily UTF-8) and file mode. Used for ordering entries.
///
/// Trees are sorted as though their name ended with `/`, even though no
/// such character is stored. So a file `a.txt` sorts before a directory `a`
/// (compared as `a/`) because `.` is less than `/`.
#[derive(Debug, Eq, PartialEq)]
pub struct PathMode<'a> {
    pub path: &'a [u8],
    pub mode: FileMode,
}

impl<'a> Ord for PathMode<'a> {
    fn cmp(&self, other: &PathMode) -> Ordering {
        match core_compare(self, other) {
            Ordering::Equal => mode_compare(self.mode, other.mode),
            x => x,
        }
    }
}

impl<'a> PartialOrd for PathMode<'a> {
    fn partial_cmp(&self, other: &PathMode) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn core_compare(left: &PathMode, right: &PathMode) -> Ordering {
    if left.path == right.path {
        Ordering::Equal
    } else {
        let l = cmp::min(left.path.len(), right.path.len());

        match left.path[..l].cmp(&right.path[..l]) {
            Ordering::Equal => (),
            non_eq => return non_eq,
        }

        let lsuffix = suffix_or_slash(&left.path[l..], left.mode);
        let rsuffix = suffix_or_slash(&right.path[l..], right.mode);

        lsuffix.cmp(rsuffix)
    }
}

const EMPTY: [u8; 0] = [];
const SLASH: [u8; 1] = [b'/'];

fn suffix_or_slash(suffix: &[u8], mode: FileMode) -> &[u8] {
    if !suffix.is_empty() || mode != FileMode::Tree {
        suffix
    } else {
        &SLASH
    }
}

fn mode_compare(m1: FileMode, m2: FileMode) -> Ordering {
    let lsuffix = suffix_or_slash(&EMPTY, m1);
    let rsuffix = suffix_or_slash(&EMPTY, m2);
    lsuffix.cmp(rsuffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &[u8]) -> PathMode<'_> {
        PathMode {
            path,
            mode: FileMode::Normal,
        }
    }

    fn tree(path: &[u8]) -> PathMode<'_> {
        PathMode {
            path,
            mode: FileMode::Tree,
        }
    }

    #[test]
    fn cmp_simple_case() {
        assert_eq!(file(b"abc").cmp(&file(b"def")), Ordering::Less);
        assert_eq!(file(b"abc").cmp(&file(b"aba")), Ordering::Greater);
    }

    #[test]
    fn cmp_lengths_mismatch() {
        assert_eq!(file(b"abc").cmp(&file(b"ab")), Ordering::Greater);
        assert_eq!(file(b"ab").cmp(&file(b"aba")), Ordering::Less);
    }

    #[test]
    fn tree_sorts_as_if_slash_suffixed() {
        // "a/" > "a.txt" because '/' (0x2f) > '.' (0x2e)
        assert_eq!(tree(b"a").cmp(&file(b"a.txt")), Ordering::Greater);
        assert_eq!(file(b"a.txt").cmp(&tree(b"a")), Ordering::Less);

        // "a/" < "a0" because '/' < '0'
        assert_eq!(tree(b"a").cmp(&file(b"a0")), Ordering::Less);

        // Without the tree mode, "a" is a prefix of "a.txt" and sorts first.
        assert_eq!(file(b"a").cmp(&file(b"a.txt")), Ordering::Less);
    }

    #[test]
    fn same_name_different_mode() {
        assert_eq!(file(b"a").cmp(&tree(b"a")), Ordering::Less);
        assert_eq!(tree(b"a").cmp(&tree(b"a")), Ordering::Equal);
        assert_eq!(file(b"a").cmp(&file(b"a")), Ordering::Equal);
    }

    #[test]
    fn sort_mixed_entries() {
        let mut entries = vec![file(b"b"), file(b"a.txt"), tree(b"a")];
        entries.sort();

        let names: Vec<&[u8]> = entries.iter().map(|pm| pm.path).collect();
        assert_eq!(names, vec![&b"a.txt"[..], &b"a"[..], &b"b"[..]]);
    }
}
