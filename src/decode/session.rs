// Mon Feb 09 2026 - Alex

use crate::config::InspectConfig;
use crate::decode::{fallback, DecodeContext, DecodeError, DecoderRegistry, ValueHandle};
use crate::display::{DisplayNode, ExpandSet, FormatHints};
use crate::memory::{Address, MemoryReader};
use crate::typeinfo::{TypeCatalog, TypeDescriptor};
use std::sync::Arc;

/// One debugging session: the memory image, the type catalog, the decoder
/// registry and the limits, wired together explicitly. Construction is
/// the registry's init point; dropping the session tears everything down.
pub struct InspectSession {
    reader: Box<dyn MemoryReader>,
    catalog: TypeCatalog,
    registry: DecoderRegistry,
    config: InspectConfig,
}

impl InspectSession {
    pub fn new(reader: Box<dyn MemoryReader>, catalog: TypeCatalog, config: InspectConfig) -> Self {
        let registry = DecoderRegistry::builtin();
        log::debug!(
            "Inspect session opened: {} catalog entries, {} decoders",
            catalog.len(),
            registry.len()
        );
        Self {
            reader,
            catalog,
            registry,
            config,
        }
    }

    pub fn with_registry(mut self, registry: DecoderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Builds a value handle for a typed location in the image.
    pub fn value(&self, type_name: &str, address: Address) -> Result<ValueHandle, DecodeError> {
        let ty: Arc<TypeDescriptor> = self.catalog.resolve(type_name);
        if ty.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(type_name.to_string()));
        }
        Ok(ValueHandle::new(address, ty))
    }

    /// Strict decode: a decoder that cannot interpret the value surfaces
    /// the error instead of producing a tree.
    pub fn try_describe(
        &self,
        name: &str,
        value: &ValueHandle,
        expansion: &ExpandSet,
    ) -> Result<DisplayNode, DecodeError> {
        let mut ctx = DecodeContext::new(
            self.reader.as_ref(),
            &self.catalog,
            &self.registry,
            &self.config,
            expansion,
            name,
            value,
        );
        ctx.put_item(value)?;
        Ok(ctx.finish())
    }

    /// Host-side decode: on a decoder failure the partial tree is
    /// discarded and a generic raw dump is produced instead.
    pub fn describe(&self, name: &str, value: &ValueHandle, expansion: &ExpandSet) -> DisplayNode {
        match self.try_describe(name, value, expansion) {
            Ok(node) => node,
            Err(err) => {
                log::warn!(
                    "Decoder for '{}' refused value at {}: {}; falling back to raw dump",
                    value.type_name(),
                    value.address(),
                    err
                );
                fallback::raw_dump(self.reader.as_ref(), &self.config, name, value)
            }
        }
    }

    pub fn format_hints(&self, type_name: &str) -> FormatHints {
        let ty = self.catalog.resolve(type_name);
        self.registry.format_hints(ty.generic_name())
    }
}

impl Drop for InspectSession {
    fn drop(&mut self) {
        log::debug!("Inspect session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::testutil::{session_over, ImageBuilder};
    use crate::display::FormatHints;
    use crate::typeinfo::TypeCatalog;

    #[test]
    fn test_value_rejects_unsized_types() {
        let mut image = ImageBuilder::new(0x1000);
        image.u64(0);
        let session = session_over(image.finish(), TypeCatalog::new(8));
        assert!(matches!(
            session.value("some::unknown::Type", Address::new(0x1000)),
            Err(DecodeError::UnsizedType(_))
        ));
        assert!(session.value("int", Address::new(0x1000)).is_ok());
    }

    #[test]
    fn test_format_hints_by_full_type_name() {
        let mut image = ImageBuilder::new(0x1000);
        image.u64(0);
        let mut catalog = TypeCatalog::new(8);
        catalog.add_class("std::map<int, int>", 48);
        let session = session_over(image.finish(), catalog);
        assert!(session
            .format_hints("std::map<int, int>")
            .contains(FormatHints::COMPACT_MAP));
        assert_eq!(session.format_hints("int"), FormatHints::empty());
    }

    #[test]
    fn test_describe_primitive_leaf() {
        let mut image = ImageBuilder::new(0x1000);
        image.i32(-3);
        let session = session_over(image.finish(), TypeCatalog::new(8));
        let value = session.value("int", Address::new(0x1000)).unwrap();
        let node = session.describe("x", &value, &ExpandSet::new());
        assert_eq!(node.name, "x");
        assert_eq!(node.display_value(), "-3");
    }
}
