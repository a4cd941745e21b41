//! # rzim
//!
//! A ZIM archive header parser and integrity checker.
//!
//! This library opens ZIM content archives, decodes and validates their
//! fixed 80-byte header, and can audit the whole file against the MD5
//! checksum stored in its trailer. Opening is cheap (header only) and
//! fails fast on any structural violation; verification is a separate,
//! explicit pass over the entire file whose negative outcome is a verdict,
//! not an error.
//!
//! ## Features
//!
//! - Open ZIM archives from the local filesystem or from in-memory buffers
//! - Field-granular structural validation of the header at open time
//! - Explicit MD5 integrity verification against the stored trailer
//! - Custom byte sources through the [`ReadAt`] trait
//!
//! ## Example
//!
//! ```no_run
//! use rzim::Archive;
//!
//! fn main() -> rzim::Result<()> {
//!     let archive = Archive::open("wikipedia.zim")?;
//!
//!     let header = archive.header();
//!     println!("{} entries in {} clusters", header.entry_count, header.cluster_count);
//!
//!     // Optional, expensive: hash the whole file and compare the trailer.
//!     if !archive.verify()? {
//!         eprintln!("archive is corrupt");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod zim;

pub use cli::Cli;
pub use error::{Result, ZimError};
pub use io::{LocalFileReader, MemoryReader, ReadAt};
pub use zim::{Archive, Header, ZimParser};
