//! Random-access byte sources.
//!
//! Everything in this crate reads through the [`ReadAt`] trait: a
//! bounds-checked, positioned read over an immutable source of known size.
//! Two implementations are provided: [`LocalFileReader`] for files on disk
//! and [`MemoryReader`] for archives already held in a byte buffer.
//!
//! Reads never mutate shared state, so any number of readers (or threads
//! sharing one reader) may access the same source concurrently.

mod local;
mod memory;

pub use local::LocalFileReader;
pub use memory::MemoryReader;

use crate::error::{Result, ZimError};

/// Trait for bounds-checked random access reading from a data source
pub trait ReadAt: Send + Sync {
    /// Fill `buf` with the bytes stored at `offset`.
    ///
    /// Fails with [`ZimError::OutOfBounds`] if the requested range does not
    /// lie entirely within the source.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()>;

    /// Get the total size of the data source
    fn size(&self) -> u64;
}

/// Reject a read that would leave the source's bounds, before any I/O.
pub(crate) fn check_bounds(offset: u64, len: usize, size: u64) -> Result<()> {
    let out_of_bounds = ZimError::OutOfBounds {
        offset,
        len: len as u64,
        size,
    };
    match offset.checked_add(len as u64) {
        Some(end) if end <= size => Ok(()),
        _ => Err(out_of_bounds),
    }
}
