//! Low-level ZIM header parser.
//!
//! This module reads the fixed header from any source that implements the
//! [`ReadAt`] trait and checks it for self-consistency against the size of
//! that source.
//!
//! ## Validation Strategy
//!
//! Validation is field-granular and ordered, and open is all-or-nothing:
//!
//! 1. The file must be large enough for a header plus the checksum trailer
//! 2. The magic number and major version must match (checked while decoding)
//! 3. The four pointer-table offsets must lie within the file
//! 4. The checksum offset must leave exactly 16 bytes of trailer
//!
//! The UUID, entry/cluster counts and page indices have no structural
//! constraint at this layer; any value is accepted. The trailing checksum
//! is deliberately *not* checked here — that is the job of the explicit
//! [`checksum`](super::checksum) pass, so that opening stays cheap.

use std::sync::Arc;

use tracing::{debug, error};

use crate::error::{Result, ZimError};
use crate::io::ReadAt;

use super::header::Header;

/// Low-level ZIM header reader.
///
/// Generic over the reader type to support both local files and in-memory
/// buffers. Typically used through [`Archive`](super::Archive) rather than
/// directly.
#[derive(Debug)]
pub struct ZimParser<R: ReadAt> {
    /// The underlying data source
    reader: Arc<R>,
    /// Total size of the archive in bytes
    size: u64,
}

impl<R: ReadAt> ZimParser<R> {
    /// Create a new parser for the given reader.
    pub fn new(reader: Arc<R>) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Read, decode and validate the archive header.
    ///
    /// # Errors
    ///
    /// Returns the specific structural violation: [`ZimError::FileTooSmall`],
    /// [`ZimError::BadMagic`], [`ZimError::UnsupportedVersion`],
    /// [`ZimError::OffsetOutOfRange`] naming the offending table, or
    /// [`ZimError::ChecksumOffsetMismatch`].
    pub fn read_header(&self) -> Result<Header> {
        if self.size < Header::MIN_FILE_SIZE {
            return Err(ZimError::FileTooSmall { size: self.size });
        }

        let mut buf = [0u8; Header::SIZE];
        self.reader.read_at(0, &mut buf)?;

        let header = Header::from_bytes(&buf)?;
        self.validate(&header)?;

        debug!(
            major = header.major_version,
            minor = header.minor_version,
            entries = header.entry_count,
            clusters = header.cluster_count,
            "decoded ZIM header"
        );
        Ok(header)
    }

    /// Check the header fields that only make sense relative to the file.
    fn validate(&self, header: &Header) -> Result<()> {
        let tables = [
            ("URL pointer table", header.url_ptr_pos),
            ("title pointer table", header.title_ptr_pos),
            ("cluster pointer table", header.cluster_ptr_pos),
            ("MIME list", header.mime_list_pos),
        ];
        for (field, offset) in tables {
            if offset > self.size {
                error!(field, offset, size = self.size, "table offset out of range");
                return Err(ZimError::OffsetOutOfRange {
                    field,
                    offset,
                    size: self.size,
                });
            }
        }

        let expected = self.size - Header::CHECKSUM_SIZE as u64;
        if header.checksum_pos != expected {
            error!(
                found = header.checksum_pos,
                expected, "checksum offset does not match file size"
            );
            return Err(ZimError::ChecksumOffsetMismatch {
                found: header.checksum_pos,
                expected,
            });
        }

        Ok(())
    }

    /// Get a reference to the underlying reader.
    pub fn reader(&self) -> &Arc<R> {
        &self.reader
    }

    /// Total size of the underlying source in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryReader;

    /// 96-byte archive skeleton: empty header, zeroed trailer.
    fn skeleton() -> Vec<u8> {
        let mut data = Vec::with_capacity(96);
        data.extend_from_slice(b"ZIM\x04");
        data.extend_from_slice(&5u16.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&[0u8; 16]);
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        for _ in 0..4 {
            data.extend_from_slice(&80u64.to_le_bytes());
        }
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&80u64.to_le_bytes());
        data.extend_from_slice(&[0u8; 16]);
        data
    }

    fn parse(data: Vec<u8>) -> Result<Header> {
        ZimParser::new(Arc::new(MemoryReader::new(data))).read_header()
    }

    #[test]
    fn accepts_minimal_archive() {
        let header = parse(skeleton()).unwrap();
        assert_eq!(header.entry_count, 0);
        assert_eq!(header.checksum_pos, 80);
    }

    #[test]
    fn rejects_file_below_minimum_size() {
        let err = parse(skeleton()[..95].to_vec()).unwrap_err();
        assert!(matches!(err, ZimError::FileTooSmall { size: 95 }));
    }

    #[test]
    fn rejects_table_offset_past_end_and_names_the_field() {
        let fields = [
            (32, "URL pointer table"),
            (40, "title pointer table"),
            (48, "cluster pointer table"),
            (56, "MIME list"),
        ];
        for (pos, name) in fields {
            let mut data = skeleton();
            data[pos..pos + 8].copy_from_slice(&97u64.to_le_bytes());
            let err = parse(data).unwrap_err();
            assert!(
                matches!(err, ZimError::OffsetOutOfRange { field, offset: 97, .. } if field == name)
            );
        }
    }

    #[test]
    fn accepts_table_offset_equal_to_file_size() {
        let mut data = skeleton();
        data[56..64].copy_from_slice(&96u64.to_le_bytes());
        assert!(parse(data).is_ok());
    }

    #[test]
    fn rejects_checksum_offset_not_sixteen_bytes_from_end() {
        for wrong in [0u64, 79, 81, 96] {
            let mut data = skeleton();
            data[72..80].copy_from_slice(&wrong.to_le_bytes());
            let err = parse(data).unwrap_err();
            assert!(matches!(
                err,
                ZimError::ChecksumOffsetMismatch {
                    found,
                    expected: 80
                } if found == wrong
            ));
        }
    }
}
