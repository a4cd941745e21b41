use std::fs::File;
use std::path::Path;

use super::{ReadAt, check_bounds};
use crate::error::Result;

/// Local file reader with random access support
#[derive(Debug)]
pub struct LocalFileReader {
    file: File,
    size: u64,
}

impl LocalFileReader {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }
}

impl ReadAt for LocalFileReader {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        check_bounds(offset, buf.len(), self.size)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileExt;
            self.file.read_exact_at(buf, offset)?;
            Ok(())
        }

        #[cfg(windows)]
        {
            // Windows has no pread; seek_read moves the cursor but takes
            // an explicit position, so loop until the buffer is full.
            use std::os::windows::fs::FileExt;
            let mut pos = offset;
            let mut filled = 0;
            while filled < buf.len() {
                let n = self.file.seek_read(&mut buf[filled..], pos)?;
                if n == 0 {
                    return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
                }
                filled += n;
                pos += n as u64;
            }
            Ok(())
        }

        #[cfg(not(any(unix, windows)))]
        {
            use std::io::{Read, Seek, SeekFrom};
            let mut file = &self.file;
            file.seek(SeekFrom::Start(offset))?;
            file.read_exact(buf)?;
            Ok(())
        }
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZimError;

    #[test]
    fn reads_back_what_was_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"hello, positioned reads").unwrap();

        let reader = LocalFileReader::new(&path).unwrap();
        assert_eq!(reader.size(), 23);

        let mut buf = [0u8; 10];
        reader.read_at(7, &mut buf).unwrap();
        assert_eq!(&buf, b"positioned");
    }

    #[test]
    fn rejects_read_past_end_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let reader = LocalFileReader::new(&path).unwrap();
        let mut buf = [0u8; 8];
        let err = reader.read_at(12, &mut buf).unwrap_err();
        assert!(matches!(err, ZimError::OutOfBounds { .. }));
    }
}
