// Mon Feb 02 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Read of {len} bytes at 0x{addr:x} is outside the image")]
    OutOfBounds { addr: u64, len: usize },
    #[error("Address overflow at 0x{addr:x} + {len}")]
    AddressOverflow { addr: u64, len: usize },
    #[error("Unterminated string at 0x{addr:x} within {limit} bytes")]
    UnterminatedString { addr: u64, limit: usize },
    #[error("Unsupported pointer size: {0}")]
    UnsupportedPointerSize(usize),
    #[error("Empty memory image")]
    EmptyImage,
}
