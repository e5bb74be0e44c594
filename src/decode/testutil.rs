// Mon Feb 09 2026 - Alex

use crate::config::InspectConfig;
use crate::decode::InspectSession;
use crate::memory::{Address, DumpBuffer};
use crate::typeinfo::TypeCatalog;

/// Builds synthetic memory images laid out field by field, standing in
/// for target-process memory in decoder tests.
pub(crate) struct ImageBuilder {
    base: u64,
    bytes: Vec<u8>,
    cursor: usize,
}

impl ImageBuilder {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            bytes: Vec::new(),
            cursor: 0,
        }
    }

    /// Address the next write lands on.
    pub fn here(&self) -> u64 {
        self.base + self.cursor as u64
    }

    fn write(&mut self, data: &[u8]) -> &mut Self {
        let end = self.cursor + data.len();
        if end > self.bytes.len() {
            self.bytes.resize(end, 0);
        }
        self.bytes[self.cursor..end].copy_from_slice(data);
        self.cursor = end;
        self
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.write(&[v])
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    pub fn u64(&mut self, v: u64) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    pub fn i64(&mut self, v: i64) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    pub fn f64(&mut self, v: f64) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    /// 64-bit pointer slot; every test image is LP64.
    pub fn ptr(&mut self, v: u64) -> &mut Self {
        self.write(&v.to_le_bytes())
    }

    pub fn bytes(&mut self, data: &[u8]) -> &mut Self {
        self.write(data)
    }

    /// Zero fill up to the next multiple of `align` from the image base.
    pub fn pad_to(&mut self, align: usize) -> &mut Self {
        while self.cursor % align != 0 {
            self.u8(0);
        }
        self
    }

    /// Repositions the write cursor to an absolute address, zero filling
    /// any gap. Earlier bytes can be overwritten.
    pub fn at(&mut self, addr: u64) -> &mut Self {
        assert!(addr >= self.base, "address before image base");
        self.cursor = (addr - self.base) as usize;
        if self.cursor > self.bytes.len() {
            self.bytes.resize(self.cursor, 0);
        }
        self
    }

    pub fn finish(&mut self) -> DumpBuffer {
        DumpBuffer::new(Address::new(self.base), std::mem::take(&mut self.bytes))
    }
}

pub(crate) fn session_over(image: DumpBuffer, catalog: TypeCatalog) -> InspectSession {
    InspectSession::new(Box::new(image), catalog, InspectConfig::default())
}

pub(crate) fn session_with_config(
    image: DumpBuffer,
    catalog: TypeCatalog,
    config: InspectConfig,
) -> InspectSession {
    InspectSession::new(Box::new(image), catalog, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryReader;

    #[test]
    fn test_image_builder_layout() {
        let mut b = ImageBuilder::new(0x100);
        b.u8(1).pad_to(4).u32(7);
        assert_eq!(b.here(), 0x108);
        let image = b.finish();
        assert_eq!(image.read_u8(Address::new(0x100)).unwrap(), 1);
        assert_eq!(image.read_u32(Address::new(0x104)).unwrap(), 7);
    }

    #[test]
    fn test_at_extends_and_overwrites() {
        let mut b = ImageBuilder::new(0x100);
        b.u32(1);
        b.at(0x110).u32(2);
        b.at(0x100).u32(3);
        b.at(0x120);
        let image = b.finish();
        assert_eq!(image.read_u32(Address::new(0x100)).unwrap(), 3);
        assert_eq!(image.read_u32(Address::new(0x110)).unwrap(), 2);
        assert_eq!(image.len(), 0x20);
    }
}
