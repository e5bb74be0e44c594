// Mon Feb 09 2026 - Alex

pub mod boost;
pub mod context;
pub mod fallback;
pub mod primitive;
pub mod profile;
pub mod registry;
pub mod session;
pub mod stdcxx;
pub mod value;

#[cfg(test)]
pub(crate) mod testutil;

pub use context::DecodeContext;
pub use profile::HostProfile;
pub use registry::DecoderRegistry;
pub use session::InspectSession;
pub use value::ValueHandle;

use crate::codec::{CodecError, FieldValue};
use crate::display::FormatHints;
use crate::layout::LayoutError;
use crate::memory::{Address, MemoryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Layout mismatch: {0}")]
    Layout(#[from] LayoutError),
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
    #[error("Format error: {0}")]
    Codec(#[from] CodecError),
    #[error("Type '{type_name}' is missing template argument {index}")]
    MissingTemplateArg { type_name: String, index: usize },
    #[error("Discriminant {got} is out of range for '{type_name}' ({arity} alternatives)")]
    BadDiscriminant {
        type_name: String,
        got: i64,
        arity: usize,
    },
    #[error("Type '{0}' has no known size")]
    UnsizedType(String),
    #[error("Corrupt structure: {0}")]
    CorruptStructure(String),
    #[error("Format field {0} has unexpected kind")]
    FieldKind(usize),
}

/// One pretty-printer. Implementations are pure reads over the target
/// image: same memory in, same display tree out, and no display state
/// left behind when they fail.
pub trait Decoder: Send + Sync {
    /// Normalized generic type name this decoder serves, the registry key.
    fn name(&self) -> &'static str;

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError>;

    /// Alternative display formats a front end may offer for this type.
    fn format_hints(&self) -> FormatHints {
        FormatHints::empty()
    }
}

pub(crate) fn field_ptr(fields: &[FieldValue], index: usize) -> Result<Address, DecodeError> {
    fields
        .get(index)
        .and_then(FieldValue::pointer)
        .ok_or(DecodeError::FieldKind(index))
}

/// Unsigned accessor that also accepts `p` fields, since size_t table
/// slots are read with the pointer format character.
pub(crate) fn field_u64(fields: &[FieldValue], index: usize) -> Result<u64, DecodeError> {
    match fields.get(index) {
        Some(FieldValue::Unsigned(v)) => Ok(*v),
        Some(FieldValue::Pointer(a)) => Ok(a.as_u64()),
        _ => Err(DecodeError::FieldKind(index)),
    }
}

pub(crate) fn field_i64(fields: &[FieldValue], index: usize) -> Result<i64, DecodeError> {
    fields
        .get(index)
        .and_then(FieldValue::signed)
        .ok_or(DecodeError::FieldKind(index))
}
