// Mon Feb 09 2026 - Alex

use crate::codec::{FieldValue, StructFormat};
use crate::config::InspectConfig;
use crate::decode::registry::DecoderRegistry;
use crate::decode::{primitive, DecodeError, HostProfile, ValueHandle};
use crate::display::{DisplayNode, ExpandSet, Sentinel, TreeBuilder};
use crate::memory::{Address, MemoryReader};
use crate::typeinfo::TypeCatalog;

/// Recursion ceiling for nested expansion, independent of the item caps.
/// Self-referential structures bottom out here instead of looping.
const MAX_DEPTH: usize = 64;

/// The capability surface a decoder sees: primitive reads over the target
/// image on one side, display-tree accumulation on the other. One context
/// lives for exactly one decode request.
pub struct DecodeContext<'a> {
    reader: &'a dyn MemoryReader,
    catalog: &'a TypeCatalog,
    registry: &'a DecoderRegistry,
    config: &'a InspectConfig,
    expansion: &'a ExpandSet,
    builder: TreeBuilder,
}

impl<'a> DecodeContext<'a> {
    pub(crate) fn new(
        reader: &'a dyn MemoryReader,
        catalog: &'a TypeCatalog,
        registry: &'a DecoderRegistry,
        config: &'a InspectConfig,
        expansion: &'a ExpandSet,
        name: &str,
        root: &ValueHandle,
    ) -> Self {
        Self {
            reader,
            catalog,
            registry,
            config,
            expansion,
            builder: TreeBuilder::new(name, root.type_name(), root.address().as_u64()),
        }
    }

    pub fn reader(&self) -> &dyn MemoryReader {
        self.reader
    }

    pub fn catalog(&self) -> &TypeCatalog {
        self.catalog
    }

    pub fn pointer_size(&self) -> usize {
        self.reader.pointer_size()
    }

    pub fn max_items(&self) -> usize {
        self.config.max_items
    }

    pub fn config(&self) -> &InspectConfig {
        self.config
    }

    pub fn profile(&self) -> HostProfile {
        self.config.profile
    }

    /// Interprets the bytes of `value` according to a struct-format
    /// string. See `codec::StructFormat` for the format characters.
    pub fn split(&self, fmt: &str, value: &ValueHandle) -> Result<Vec<FieldValue>, DecodeError> {
        self.split_at(fmt, value.address())
    }

    pub fn split_at(&self, fmt: &str, addr: Address) -> Result<Vec<FieldValue>, DecodeError> {
        let format = StructFormat::parse(fmt, self.catalog)?;
        Ok(format.read(self.reader, addr)?)
    }

    pub fn extract_pointer(&self, addr: Address) -> Result<Address, DecodeError> {
        Ok(self.reader.read_ptr(addr)?)
    }

    /// Whether the front end wants children for the current node.
    pub fn is_expanded(&self) -> bool {
        let depth = self.builder.depth();
        depth < MAX_DEPTH && self.expansion.should_expand(&self.builder.path(), depth)
    }

    pub fn put_value<S: Into<String>>(&mut self, value: S) {
        self.builder.set_value(value.into());
    }

    /// Reports a sentinel state. Whether an explicit zero child count
    /// follows depends on the host profile.
    pub fn put_sentinel(&mut self, sentinel: Sentinel) {
        self.builder.set_sentinel(sentinel);
        if self.profile().states_empty_children() {
            self.builder.set_child_count(0);
        }
    }

    pub fn put_item_count(&mut self, count: usize) {
        let noun = if count == 1 { "item" } else { "items" };
        self.builder.set_value(format!("<{} {}>", count, noun));
        self.builder.set_child_count(count);
    }

    /// Count display for a walk that hit the traversal cap.
    pub fn put_capped_item_count(&mut self, cap: usize) {
        self.builder.set_value(format!("<more than {} items>", cap));
        self.builder.set_child_count(cap);
    }

    pub fn put_type_name(&mut self, type_name: &str) {
        self.builder.set_type_name(type_name);
    }

    /// Decodes `value` into the *current* node: the wrapped-payload path
    /// used by optional, variant and smart-pointer decoders.
    pub fn put_item(&mut self, value: &ValueHandle) -> Result<(), DecodeError> {
        self.decode_in_place(value)
    }

    /// Decodes `value` as a named child of the current node.
    pub fn put_child(&mut self, name: &str, value: &ValueHandle) -> Result<(), DecodeError> {
        self.builder
            .begin_child(name, value.type_name(), value.address().as_u64());
        let result = self.decode_in_place(value);
        self.builder.end_child();
        result
    }

    /// Adds a leaf child with an already-rendered value.
    pub fn put_child_value(&mut self, name: &str, type_name: &str, value: String, addr: Address) {
        self.builder.begin_child(name, type_name, addr.as_u64());
        self.builder.set_value(value);
        self.builder.end_child();
    }

    fn decode_in_place(&mut self, value: &ValueHandle) -> Result<(), DecodeError> {
        let registry = self.registry;
        match registry.lookup(value.type_desc().generic_name()) {
            Some(decoder) => decoder.decode(self, value),
            None => primitive::decode_leaf(self, value),
        }
    }

    pub(crate) fn finish(self) -> DisplayNode {
        self.builder.finish()
    }
}
