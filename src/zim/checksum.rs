//! MD5 integrity verification.
//!
//! A ZIM file ends with the MD5 digest of every byte that precedes it.
//! Verification hashes the whole body in fixed-size chunks and compares
//! the result byte-for-byte with the stored trailer. A mismatch is a
//! verdict about the archive, not an error: the caller decides what to do
//! with a corrupt-but-well-formed file.

use md5::{Digest, Md5};

use crate::error::Result;
use crate::io::ReadAt;

use super::header::Header;

/// Read granularity for the verification pass.
const CHUNK_SIZE: u64 = 64 * 1024;

/// Compute the MD5 digest of the first `limit` bytes of `reader`.
pub fn compute<R: ReadAt + ?Sized>(reader: &R, limit: u64) -> Result<[u8; 16]> {
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; CHUNK_SIZE.min(limit) as usize];
    let mut offset = 0u64;
    while offset < limit {
        let n = (limit - offset).min(CHUNK_SIZE) as usize;
        reader.read_at(offset, &mut buf[..n])?;
        hasher.update(&buf[..n]);
        offset += n as u64;
    }
    Ok(hasher.finalize().into())
}

/// Read the 16 checksum bytes stored at the end of the archive.
pub fn stored<R: ReadAt + ?Sized>(reader: &R, header: &Header) -> Result<[u8; 16]> {
    let mut trailer = [0u8; Header::CHECKSUM_SIZE];
    reader.read_at(header.checksum_pos, &mut trailer)?;
    Ok(trailer)
}

/// Hash everything before the trailer and compare against it.
///
/// Returns `Ok(false)` on a mismatch; only I/O failures are errors. The
/// pass is O(file size) and re-reads the file on every call, so repeated
/// calls always reflect the bytes currently on disk.
pub fn verify<R: ReadAt + ?Sized>(reader: &R, header: &Header) -> Result<bool> {
    let computed = compute(reader, header.checksum_pos)?;
    Ok(computed == stored(reader, header)?)
}
