// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryRange};

/// Read-only view of the target process image. All primitive reads are
/// little-endian and bounds checked; implementations never mutate the image.
pub trait MemoryReader: Send + Sync {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;

    fn pointer_size(&self) -> usize;

    fn range(&self) -> MemoryRange;

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        Ok(self.read_bytes(addr, 1)?[0])
    }

    fn read_u16(&self, addr: Address) -> Result<u16, MemoryError> {
        let b = self.read_bytes(addr, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn read_u32(&self, addr: Address) -> Result<u32, MemoryError> {
        let b = self.read_bytes(addr, 4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn read_u64(&self, addr: Address) -> Result<u64, MemoryError> {
        let b = self.read_bytes(addr, 8)?;
        Ok(u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    fn read_i8(&self, addr: Address) -> Result<i8, MemoryError> {
        Ok(self.read_u8(addr)? as i8)
    }

    fn read_i16(&self, addr: Address) -> Result<i16, MemoryError> {
        Ok(self.read_u16(addr)? as i16)
    }

    fn read_i32(&self, addr: Address) -> Result<i32, MemoryError> {
        Ok(self.read_u32(addr)? as i32)
    }

    fn read_i64(&self, addr: Address) -> Result<i64, MemoryError> {
        Ok(self.read_u64(addr)? as i64)
    }

    fn read_f32(&self, addr: Address) -> Result<f32, MemoryError> {
        Ok(f32::from_bits(self.read_u32(addr)?))
    }

    fn read_f64(&self, addr: Address) -> Result<f64, MemoryError> {
        Ok(f64::from_bits(self.read_u64(addr)?))
    }

    fn read_ptr(&self, addr: Address) -> Result<Address, MemoryError> {
        match self.pointer_size() {
            4 => Ok(Address::new(self.read_u32(addr)? as u64)),
            8 => Ok(Address::new(self.read_u64(addr)?)),
            n => Err(MemoryError::UnsupportedPointerSize(n)),
        }
    }

    /// Reads a NUL-terminated byte string, at most `limit` bytes. Returns
    /// the bytes (without terminator) and whether the read was truncated.
    fn read_c_string(&self, addr: Address, limit: usize) -> Result<(Vec<u8>, bool), MemoryError> {
        let mut out = Vec::new();
        for i in 0..limit {
            let b = self.read_u8(addr + i as u64)?;
            if b == 0 {
                return Ok((out, false));
            }
            out.push(b);
        }
        Ok((out, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::DumpBuffer;

    fn image() -> DumpBuffer {
        let mut data = vec![0u8; 32];
        data[0] = 0x78;
        data[1] = 0x56;
        data[2] = 0x34;
        data[3] = 0x12;
        data[8..16].copy_from_slice(&0xdead_beef_u64.to_le_bytes());
        data[16..19].copy_from_slice(b"abc");
        DumpBuffer::new(Address::new(0x1000), data)
    }

    #[test]
    fn test_scalar_reads() {
        let m = image();
        assert_eq!(m.read_u32(Address::new(0x1000)).unwrap(), 0x12345678);
        assert_eq!(m.read_u16(Address::new(0x1000)).unwrap(), 0x5678);
        assert_eq!(m.read_u64(Address::new(0x1008)).unwrap(), 0xdead_beef);
        assert_eq!(m.read_i32(Address::new(0x1004)).unwrap(), 0);
    }

    #[test]
    fn test_read_ptr() {
        let m = image();
        assert_eq!(m.read_ptr(Address::new(0x1008)).unwrap(), Address::new(0xdead_beef));
    }

    #[test]
    fn test_read_c_string() {
        let m = image();
        let (bytes, truncated) = m.read_c_string(Address::new(0x1010), 16).unwrap();
        assert_eq!(bytes, b"abc");
        assert!(!truncated);

        let (bytes, truncated) = m.read_c_string(Address::new(0x1010), 2).unwrap();
        assert_eq!(bytes, b"ab");
        assert!(truncated);
    }
}
