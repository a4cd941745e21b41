use super::{ReadAt, check_bounds};
use crate::error::Result;

/// In-memory byte buffer reader.
///
/// Used to open archives that are already resident in RAM (downloaded
/// buffers, embedded fixtures), and by the test suite.
#[derive(Debug, Clone)]
pub struct MemoryReader {
    data: Vec<u8>,
}

impl MemoryReader {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl ReadAt for MemoryReader {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        check_bounds(offset, buf.len(), self.size())?;
        let start = offset as usize;
        buf.copy_from_slice(&self.data[start..start + buf.len()]);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZimError;

    #[test]
    fn reads_within_bounds() {
        let reader = MemoryReader::new(vec![1, 2, 3, 4, 5]);
        let mut buf = [0u8; 3];
        reader.read_at(1, &mut buf).unwrap();
        assert_eq!(buf, [2, 3, 4]);
        assert_eq!(reader.size(), 5);
    }

    #[test]
    fn rejects_read_past_end() {
        let reader = MemoryReader::new(vec![0u8; 8]);
        let mut buf = [0u8; 4];
        let err = reader.read_at(6, &mut buf).unwrap_err();
        assert!(matches!(err, ZimError::OutOfBounds { offset: 6, .. }));
    }

    #[test]
    fn rejects_overflowing_offset() {
        let reader = MemoryReader::new(vec![0u8; 8]);
        let mut buf = [0u8; 4];
        let err = reader.read_at(u64::MAX, &mut buf).unwrap_err();
        assert!(matches!(err, ZimError::OutOfBounds { .. }));
    }

    #[test]
    fn zero_length_read_at_end_is_fine() {
        let reader = MemoryReader::new(vec![0u8; 8]);
        let mut buf = [];
        reader.read_at(8, &mut buf).unwrap();
    }
}
