// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryRange, MemoryReader};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

enum ImageData {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl ImageData {
    fn as_slice(&self) -> &[u8] {
        match self {
            ImageData::Owned(v) => v,
            ImageData::Mapped(m) => m,
        }
    }
}

/// A memory-dump image standing in for target-process memory: a contiguous
/// byte block mapped at a base address.
pub struct DumpBuffer {
    data: ImageData,
    base: Address,
    pointer_size: usize,
    path: Option<PathBuf>,
}

impl DumpBuffer {
    pub fn new(base: Address, data: Vec<u8>) -> Self {
        Self {
            data: ImageData::Owned(data),
            base,
            pointer_size: 8,
            path: None,
        }
    }

    pub fn with_pointer_size(mut self, pointer_size: usize) -> Self {
        assert!(pointer_size == 4 || pointer_size == 8, "pointer size must be 4 or 8");
        self.pointer_size = pointer_size;
        self
    }

    /// Maps a raw dump file at `base`. The file is kept mapped for the
    /// lifetime of the buffer; the mapping is never written through.
    pub fn load<P: AsRef<Path>>(path: P, base: Address) -> Result<Self, MemoryError> {
        let file = File::open(path.as_ref())?;
        let mmap = unsafe { Mmap::map(&file)? };
        if mmap.is_empty() {
            return Err(MemoryError::EmptyImage);
        }
        log::debug!(
            "Mapped {} byte dump from {} at {}",
            mmap.len(),
            path.as_ref().display(),
            base
        );
        Ok(Self {
            data: ImageData::Mapped(mmap),
            base,
            pointer_size: 8,
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn len(&self) -> usize {
        self.data.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.as_slice().is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl MemoryReader for DumpBuffer {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr.checked_add(len as u64).is_none() {
            return Err(MemoryError::AddressOverflow { addr: addr.as_u64(), len });
        }
        if !self.range().contains_span(addr, len) {
            return Err(MemoryError::OutOfBounds { addr: addr.as_u64(), len });
        }
        let off = (addr - self.base) as usize;
        Ok(self.data.as_slice()[off..off + len].to_vec())
    }

    fn pointer_size(&self) -> usize {
        self.pointer_size
    }

    fn range(&self) -> MemoryRange {
        MemoryRange::from_start_size(self.base, self.data.as_slice().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checked_reads() {
        let buf = DumpBuffer::new(Address::new(0x4000), vec![1, 2, 3, 4]);
        assert_eq!(buf.read_bytes(Address::new(0x4000), 4).unwrap(), vec![1, 2, 3, 4]);
        assert!(matches!(
            buf.read_bytes(Address::new(0x4001), 4),
            Err(MemoryError::OutOfBounds { .. })
        ));
        assert!(matches!(
            buf.read_bytes(Address::new(0x3fff), 1),
            Err(MemoryError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_pointer_size_builder() {
        let buf = DumpBuffer::new(Address::zero(), vec![0xaa, 0xbb, 0xcc, 0xdd, 0, 0, 0, 0])
            .with_pointer_size(4);
        assert_eq!(buf.pointer_size(), 4);
        assert_eq!(buf.read_ptr(Address::zero()).unwrap(), Address::new(0xddccbbaa));
    }

    #[test]
    fn test_overflow_guard() {
        let buf = DumpBuffer::new(Address::new(u64::MAX - 2), vec![0; 2]);
        assert!(matches!(
            buf.read_bytes(Address::new(u64::MAX - 1), 8),
            Err(MemoryError::AddressOverflow { .. })
        ));
    }
}
