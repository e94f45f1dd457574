//! zlib compression for stored objects.
//!
//! Objects are compressed one at a time with the zlib stream format,
//! matching the loose object files written by command-line git.

use std::io::{self, Write};

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};
use thiserror::Error;

/// Reasons why stored bytes can not be decompressed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DecompressError {
    /// The bytes are not a valid zlib stream.
    #[error("invalid zlib stream: {0}")]
    Invalid(String),

    /// The zlib stream ended before its end marker and checksum.
    #[error("zlib stream is truncated")]
    Truncated,
}

/// Compress `bytes` as a single zlib stream.
pub fn compress(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Decompress a single zlib stream.
///
/// The stream must be complete: input that runs out before the zlib end
/// marker and checksum is rejected rather than returned as a prefix.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut d = Decompress::new(true);
    let mut out = Vec::with_capacity(bytes.len().saturating_mul(2).max(64));

    loop {
        let consumed = d.total_in() as usize;
        let produced = out.len();

        let status = d
            .decompress_vec(&bytes[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| DecompressError::Invalid(e.to_string()))?;

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                if out.len() == out.capacity() {
                    out.reserve(out.capacity());
                } else if d.total_in() as usize == bytes.len()
                    || (d.total_in() as usize == consumed && out.len() == produced)
                {
                    return Err(DecompressError::Truncated);
                }
            }
        }
    }
}
