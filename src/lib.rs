// Mon Feb 16 2026 - Alex

pub mod codec;
pub mod config;
pub mod decode;
pub mod display;
pub mod layout;
pub mod memory;
pub mod output;
pub mod typeinfo;
pub mod utils;

pub use config::InspectConfig;
pub use decode::{DecodeContext, DecodeError, Decoder, DecoderRegistry, HostProfile, InspectSession, ValueHandle};
pub use display::{DisplayNode, ExpandSet, FormatHints, Sentinel};
pub use memory::{Address, DumpBuffer, MemoryError, MemoryReader};
pub use output::{JsonSerializer, TextRenderer};
pub use typeinfo::{TypeCatalog, TypeDescriptor};
