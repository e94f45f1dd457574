pub(crate) fn header<'a>(line: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    match split_once(line, b' ') {
        Some((maybe_name, value)) if maybe_name == name => Some(value),
        _ => None,
    }
}

/// Split `s` at the first occurrence of `c`, dropping the delimiter.
///
/// Returns `None` if `c` does not occur.
pub(crate) fn split_once(s: &[u8], c: u8) -> Option<(&[u8], &[u8])> {
    s.iter()
        .position(|b| *b == c)
        .map(|n| (&s[0..n], &s[n + 1..]))
}

/// Parse an unsigned decimal number with no sign, padding, or leading zeros
/// (a lone `0` is allowed).
pub(crate) fn parse_decimal(s: &[u8]) -> Option<usize> {
    if s.is_empty() || (s.len() > 1 && s[0] == b'0') {
        return None;
    }

    s.iter().try_fold(0usize, |acc, c| match c {
        b'0'..=b'9' => acc.checked_mul(10)?.checked_add((c - b'0') as usize),
        _ => None,
    })
}
