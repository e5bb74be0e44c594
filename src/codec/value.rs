// Wed Feb 04 2026 - Alex

use crate::memory::Address;
use crate::typeinfo::TypeDescriptor;
use std::sync::Arc;

/// One decoded field of a `split` read.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Pointer(Address),
    /// Embedded `{TypeName}` field: not read eagerly, handed back as a
    /// typed sub-region for the caller to decode.
    Typed { addr: Address, ty: Arc<TypeDescriptor> },
}

impl FieldValue {
    pub fn unsigned(&self) -> Option<u64> {
        match self {
            FieldValue::Unsigned(v) => Some(*v),
            _ => None,
        }
    }

    pub fn signed(&self) -> Option<i64> {
        match self {
            FieldValue::Signed(v) => Some(*v),
            _ => None,
        }
    }

    pub fn float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<Address> {
        match self {
            FieldValue::Pointer(a) => Some(*a),
            _ => None,
        }
    }

    pub fn typed(&self) -> Option<(Address, &Arc<TypeDescriptor>)> {
        match self {
            FieldValue::Typed { addr, ty } => Some((*addr, ty)),
            _ => None,
        }
    }
}
