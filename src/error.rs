//! Error types for opening and verifying ZIM archives.
//!
//! All structural violations found while opening an archive surface as a
//! [`ZimError`]; no partially decoded archive is ever returned. A checksum
//! mismatch during verification is *not* an error — it is a legitimate
//! boolean outcome of [`Archive::verify`](crate::Archive::verify), so that
//! callers can distinguish "could not open" from "opened but corrupt".

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZimError>;

/// The error type for all ZIM operations.
#[derive(Debug, Error)]
pub enum ZimError {
    /// The file is shorter than the 80-byte header plus the 16-byte
    /// checksum trailer.
    #[error("file too small for a ZIM archive: {size} bytes")]
    FileTooSmall { size: u64 },

    /// The first four bytes are not the ZIM magic number.
    #[error("invalid magic number {found:#010x}")]
    BadMagic { found: u32 },

    /// The major version field holds a value this crate does not understand.
    #[error("unsupported ZIM major version {found}")]
    UnsupportedVersion { found: u16 },

    /// A pointer-table offset in the header points past the end of the file.
    #[error("{field} offset {offset} is past the end of the file ({size} bytes)")]
    OffsetOutOfRange {
        field: &'static str,
        offset: u64,
        size: u64,
    },

    /// The declared checksum offset does not leave exactly 16 bytes of
    /// trailer at the end of the file.
    #[error("checksum offset {found} does not match the file size (expected {expected})")]
    ChecksumOffsetMismatch { found: u64, expected: u64 },

    /// A read was requested past the end of the byte source.
    ///
    /// Unreachable if the header validation is correct, but kept as a
    /// distinct kind so a bad read is reportable rather than undefined.
    #[error("read of {len} bytes at offset {offset} is out of bounds (source is {size} bytes)")]
    OutOfBounds { offset: u64, len: u64, size: u64 },

    /// An underlying I/O operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
