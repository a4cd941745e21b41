//! ZIM archive parsing and verification.
//!
//! This module provides functionality for opening ZIM content archives,
//! decoding and validating their header, and auditing their integrity.
//!
//! ## Architecture
//!
//! The module is organized into four main components:
//!
//! - [`header`]: The fixed 80-byte header structure and its field-level decoding
//! - [`parser`]: File-level validation of the decoded header against the source
//! - [`checksum`]: The MD5 integrity pass over the archive body
//! - [`archive`]: High-level open/verify API for end users
//!
//! ## ZIM Format Overview
//!
//! A ZIM file consists of:
//! 1. A fixed 80-byte little-endian header describing table locations
//! 2. The archive payload (pointer tables, directory entries, clusters)
//! 3. A 16-byte MD5 checksum of everything before it, as the file trailer
//!
//! Opening an archive reads and validates only the header, so opening stays
//! cheap no matter how large the file is. Verification is a separate,
//! explicit pass that hashes the whole file; a failed verification is a
//! verdict about the archive, not an error.
//!
//! ## Supported Features
//!
//! - ZIM major versions 5 and 6
//! - Field-granular structural validation at open time
//! - Full-file MD5 verification against the stored trailer
//!
//! ## Limitations
//!
//! - No directory-entry lookup or content retrieval
//! - No cluster decompression

mod archive;
pub mod checksum;
mod header;
mod parser;

pub use archive::Archive;
pub use header::Header;
pub use parser::ZimParser;
