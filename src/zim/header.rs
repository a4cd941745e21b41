use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use crate::error::{Result, ZimError};

/// ZIM file header - fixed 80-byte prefix, little-endian throughout.
///
/// The magic number and major version are checked while decoding; offsets
/// are validated against the file size by [`ZimParser`](super::ZimParser).
/// The UUID, the entry/cluster counts and the page indices carry no
/// structural constraint and are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub major_version: u16,
    pub minor_version: u16,
    pub uuid: [u8; 16],
    pub entry_count: u32,
    pub cluster_count: u32,
    pub url_ptr_pos: u64,
    pub title_ptr_pos: u64,
    pub cluster_ptr_pos: u64,
    pub mime_list_pos: u64,
    pub main_page: u32,
    pub layout_page: u32,
    pub checksum_pos: u64,
}

impl Header {
    /// Magic number identifying a ZIM file (the bytes `ZIM\x04`).
    pub const MAGIC: u32 = 0x044D_495A;

    /// Size of the fixed header in bytes.
    pub const SIZE: usize = 80;

    /// Size of the MD5 trailer at the end of the file.
    pub const CHECKSUM_SIZE: usize = 16;

    /// Smallest file that can hold a header plus the checksum trailer.
    pub const MIN_FILE_SIZE: u64 = (Self::SIZE + Self::CHECKSUM_SIZE) as u64;

    /// Major versions this crate understands.
    pub const SUPPORTED_MAJOR_VERSIONS: [u16; 2] = [5, 6];

    /// Sentinel page index meaning "no such page".
    pub const NO_PAGE: u32 = u32::MAX;

    /// Decode a header from the first [`Header::SIZE`] bytes of a file.
    ///
    /// Decoding is all-or-nothing: a bad magic number or an unsupported
    /// major version fails here, and no partially valid header is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ZimError::FileTooSmall`], [`ZimError::BadMagic`] or
    /// [`ZimError::UnsupportedVersion`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(ZimError::FileTooSmall {
                size: data.len() as u64,
            });
        }

        let mut cursor = Cursor::new(data);

        let magic = cursor.read_u32::<LittleEndian>()?;
        if magic != Self::MAGIC {
            return Err(ZimError::BadMagic { found: magic });
        }

        let major_version = cursor.read_u16::<LittleEndian>()?;
        if !Self::SUPPORTED_MAJOR_VERSIONS.contains(&major_version) {
            return Err(ZimError::UnsupportedVersion {
                found: major_version,
            });
        }

        // Forward-compatible: the minor version is informational only.
        let minor_version = cursor.read_u16::<LittleEndian>()?;

        let mut uuid = [0u8; 16];
        cursor.read_exact(&mut uuid)?;

        Ok(Self {
            major_version,
            minor_version,
            uuid,
            entry_count: cursor.read_u32::<LittleEndian>()?,
            cluster_count: cursor.read_u32::<LittleEndian>()?,
            url_ptr_pos: cursor.read_u64::<LittleEndian>()?,
            title_ptr_pos: cursor.read_u64::<LittleEndian>()?,
            cluster_ptr_pos: cursor.read_u64::<LittleEndian>()?,
            mime_list_pos: cursor.read_u64::<LittleEndian>()?,
            main_page: cursor.read_u32::<LittleEndian>()?,
            layout_page: cursor.read_u32::<LittleEndian>()?,
            checksum_pos: cursor.read_u64::<LittleEndian>()?,
        })
    }

    /// Whether the archive declares a main page.
    pub fn has_main_page(&self) -> bool {
        self.main_page != Self::NO_PAGE
    }

    /// Whether the archive declares a layout page.
    pub fn has_layout_page(&self) -> bool {
        self.layout_page != Self::NO_PAGE
    }

    /// Minor version 1 introduced the new namespace scheme.
    pub fn uses_new_namespace_scheme(&self) -> bool {
        self.minor_version >= 1
    }

    /// The UUID in the canonical hyphenated form.
    pub fn uuid_string(&self) -> String {
        let hex: String = self.uuid.iter().map(|b| format!("{b:02x}")).collect();
        format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }
}
