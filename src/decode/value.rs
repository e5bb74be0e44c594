// Mon Feb 09 2026 - Alex

use crate::decode::DecodeError;
use crate::memory::Address;
use crate::typeinfo::TypeDescriptor;
use std::sync::Arc;

/// The opaque raw-value handle decoders receive: an address in the target
/// image plus the static type metadata attached to it. The handle never
/// owns target memory; reads go through the decode context.
#[derive(Debug, Clone)]
pub struct ValueHandle {
    address: Address,
    ty: Arc<TypeDescriptor>,
}

impl ValueHandle {
    pub fn new(address: Address, ty: Arc<TypeDescriptor>) -> Self {
        Self { address, ty }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn type_desc(&self) -> &Arc<TypeDescriptor> {
        &self.ty
    }

    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// The index-th type template argument, skipping integral arguments.
    pub fn type_arg(&self, index: usize) -> Result<Arc<TypeDescriptor>, DecodeError> {
        self.ty
            .type_arg(index)
            .cloned()
            .ok_or_else(|| DecodeError::MissingTemplateArg {
                type_name: self.ty.name().to_string(),
                index,
            })
    }

    pub fn at_offset(&self, offset: usize, ty: Arc<TypeDescriptor>) -> Self {
        Self {
            address: self.address + offset as u64,
            ty,
        }
    }

    pub fn cast(&self, ty: Arc<TypeDescriptor>) -> Self {
        Self {
            address: self.address,
            ty,
        }
    }
}
