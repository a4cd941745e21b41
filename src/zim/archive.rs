use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::io::{LocalFileReader, MemoryReader, ReadAt};

use super::checksum;
use super::header::Header;
use super::parser::ZimParser;

/// An opened, structurally validated ZIM archive.
///
/// The header is decoded and validated eagerly when the archive is opened
/// and cached for the archive's lifetime; opening fails fast on any
/// structural violation and never yields a partially valid archive.
///
/// After opening there is no interior mutability, so a shared `&Archive`
/// may be used from several threads at once, including concurrent
/// [`verify`](Archive::verify) calls.
#[derive(Debug)]
pub struct Archive<R: ReadAt> {
    parser: ZimParser<R>,
    header: Header,
}

impl Archive<LocalFileReader> {
    /// Open the ZIM file at `path`.
    ///
    /// Only the header is read; the rest of the file stays untouched until
    /// [`verify`](Archive::verify) is called.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = LocalFileReader::new(path.as_ref())?;
        Self::new(Arc::new(reader))
    }
}

impl Archive<MemoryReader> {
    /// Open an archive already held in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(Arc::new(MemoryReader::new(bytes.into())))
    }
}

impl<R: ReadAt> Archive<R> {
    /// Open an archive over any random-access byte source.
    pub fn new(reader: Arc<R>) -> Result<Self> {
        let parser = ZimParser::new(reader);
        let header = parser.read_header()?;
        debug!(size = parser.size(), "opened ZIM archive");
        Ok(Self { parser, header })
    }

    /// The validated header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Total size of the underlying byte source.
    pub fn size(&self) -> u64 {
        self.parser.size()
    }

    /// Run the full integrity pass: MD5 over everything before the trailer,
    /// compared with the stored digest.
    ///
    /// Returns `Ok(false)` for a corrupt-but-well-formed archive. Expensive
    /// (reads the entire file), idempotent and side-effect free.
    pub fn verify(&self) -> Result<bool> {
        checksum::verify(self.parser.reader().as_ref(), &self.header)
    }

    /// The stored MD5 trailer as a lowercase hex string.
    pub fn checksum(&self) -> Result<String> {
        let trailer = checksum::stored(self.parser.reader().as_ref(), &self.header)?;
        Ok(trailer.iter().map(|b| format!("{b:02x}")).collect())
    }
}
