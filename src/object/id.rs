use std::fmt::{self, Write};
use std::str::FromStr;

use sha1::{Digest, Sha1};
use thiserror::Error;

/// An error which can be returned when parsing an object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Among other causes, this variant will be constructed when parsing a string that
    /// contains an uppercase letter.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// Value has more digits (or bytes) than an object ID can hold.
    #[error("value is more than 40 digits long")]
    Overflow,

    /// Value has fewer digits (or bytes) than an object ID requires.
    #[error("value is less than 40 digits long")]
    Underflow,
}

/// Number of raw bytes in an object ID.
pub const ID_LEN: usize = 20;

/// An object ID identifies an object within a repository.
///
/// It is the SHA-1 digest of the object's canonical encoding. It is
/// stored as a 20-byte signature and rendered as 40 lowercase hex digits.
/// The two forms are never interchangeable: use [`Id::from_hex`] / `Display`
/// for text and [`Id::from_raw`] / [`Id::as_raw`] for the binary form
/// found inside tree payloads.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Id {
    id: [u8; ID_LEN],
}

impl Id {
    /// Compute the ID of an exact byte sequence.
    pub fn digest(bytes: &[u8]) -> Id {
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        Id::from_hasher(hasher)
    }

    pub(crate) fn from_hasher(hasher: Sha1) -> Id {
        let mut id = [0u8; ID_LEN];
        id.copy_from_slice(&hasher.finalize());
        Id { id }
    }

    /// Create an ID from a 20-byte slice.
    ///
    /// It is an error if the slice contains anything other than 20 bytes.
    pub fn from_raw(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            ID_LEN => {
                let mut raw = [0u8; ID_LEN];
                raw.copy_from_slice(id);
                Ok(Id { id: raw })
            }
            0 => Err(ParseIdError::Empty),
            n if n < ID_LEN => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Return the 20 raw bytes of this ID.
    pub fn as_raw(&self) -> &[u8; ID_LEN] {
        &self.id
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            40 => {
                let mut raw = [0u8; ID_LEN];
                for (byte, pair) in raw.iter_mut().zip(hex.chunks(2)) {
                    *byte = digit_value(pair[0])? << 4 | digit_value(pair[1])?;
                }
                Ok(Id { id: raw })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Render this ID as 40 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Split the hex form into the directory (first two digits) and file
    /// name (remaining 38 digits) used for loose object storage.
    pub fn loose_object_path(&self) -> (String, String) {
        let mut hex = self.to_hex();
        let file_name = hex.split_off(2);
        (hex, file_name)
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw() {
        let b = [
            0x3c, 0xd9, 0x32, 0x9a, 0xc5, 0x36, 0x13, 0xa0, 0xbf, 0xa1, 0x98, 0xae, 0x28, 0xf3,
            0xaf, 0x95, 0x7e, 0x49, 0x57, 0x3c,
        ];

        let oid = Id::from_raw(&b).unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
        assert_eq!(oid.as_raw(), &b);

        let b: [u8; 0] = [];
        assert_eq!(Id::from_raw(&b).unwrap_err(), ParseIdError::Empty);

        let b = [0x3c; 19];
        assert_eq!(Id::from_raw(&b).unwrap_err(), ParseIdError::Underflow);

        let b = [0x3c; 21];
        assert_eq!(Id::from_raw(&b).unwrap_err(), ParseIdError::Overflow);
    }

    #[test]
    fn digest() {
        // $ echo 'test content' | git hash-object --stdin
        let oid = Id::digest(b"blob 13\0test content\n");
        assert_eq!(oid.to_hex(), "d670460b4b4aece5915caf5c68d12f560a9fe3e4");

        // Deterministic.
        assert_eq!(oid, Id::digest(b"blob 13\0test content\n"));
        assert_ne!(oid, Id::digest(b"blob 13\0test content!"));
    }

    #[test]
    fn from_hex() {
        let oid = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573c".as_bytes()).unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
        assert_eq!(oid.as_raw()[0], 0x3c);
        assert_eq!(oid.as_raw()[19], 0x3c);
    }

    #[test]
    fn from_str() {
        let oid = Id::from_str("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
    }

    #[test]
    fn all_zero_is_a_valid_id() {
        let oid = Id::from_hex("0000000000000000000000000000000000000000").unwrap();
        assert_eq!(oid.as_raw(), &[0u8; 20]);
    }

    #[test]
    fn from_empty_str() {
        let err = Id::from_hex("").unwrap_err();
        assert_eq!(err, ParseIdError::Empty);
        assert_eq!(err.to_string(), "cannot parse object ID from empty string");
    }

    #[test]
    fn from_invalid_str() {
        let err = Id::from_hex("3cD9329ac53613a0bfa198ae28f3af957e49573c").unwrap_err();
        assert_eq!(err, ParseIdError::InvalidDigit('D'));
        assert_eq!(err.to_string(), "value contains invalid digit `D`");

        let err = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573g").unwrap_err();
        assert_eq!(err, ParseIdError::InvalidDigit('g'));
    }

    #[test]
    fn from_hex_too_long() {
        let err = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573c4").unwrap_err();
        assert_eq!(err, ParseIdError::Overflow);
        assert_eq!(err.to_string(), "value is more than 40 digits long");
    }

    #[test]
    fn from_hex_too_short() {
        let err = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573").unwrap_err();
        assert_eq!(err, ParseIdError::Underflow);
        assert_eq!(err.to_string(), "value is less than 40 digits long");
    }

    #[test]
    fn loose_object_path() {
        let oid = Id::from_hex("d670460b4b4aece5915caf5c68d12f560a9fe3e4").unwrap();
        let (dir, file) = oid.loose_object_path();
        assert_eq!(dir, "d6");
        assert_eq!(file, "70460b4b4aece5915caf5c68d12f560a9fe3e4");
    }
}
