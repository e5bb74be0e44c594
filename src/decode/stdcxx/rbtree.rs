// Thu Feb 12 2026 - Alex

use crate::codec::align_up;
use crate::decode::{field_ptr, field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::FormatHints;
use crate::memory::Address;
use crate::typeinfo::{TypeCatalog, TypeDescriptor};
use std::sync::Arc;

/// GNU `_Rb_tree` backing std::set/map and their multi variants: an
/// empty comparator slot, then the header node base `{color, parent,
/// left, right}` with header.left the leftmost element, then the node
/// count. Element nodes repeat the base layout in front of the payload.

fn node_parent(ctx: &DecodeContext<'_>, node: Address) -> Result<Address, DecodeError> {
    ctx.extract_pointer(node + ctx.pointer_size() as u64)
}

fn node_left(ctx: &DecodeContext<'_>, node: Address) -> Result<Address, DecodeError> {
    ctx.extract_pointer(node + 2 * ctx.pointer_size() as u64)
}

fn node_right(ctx: &DecodeContext<'_>, node: Address) -> Result<Address, DecodeError> {
    ctx.extract_pointer(node + 3 * ctx.pointer_size() as u64)
}

/// In-order successor via child/parent links, the `_Rb_tree_increment`
/// walk. Only valid between elements; the caller bounds the iteration by
/// the stored node count and never steps past the last element.
fn successor(ctx: &DecodeContext<'_>, node: Address) -> Result<Address, DecodeError> {
    let right = node_right(ctx, node)?;
    if !right.is_null() {
        let mut n = right;
        loop {
            let left = node_left(ctx, n)?;
            if left.is_null() {
                return Ok(n);
            }
            n = left;
        }
    }
    let mut n = node;
    let mut parent = node_parent(ctx, n)?;
    loop {
        if parent.is_null() {
            return Err(DecodeError::CorruptStructure(
                "broken parent chain in tree".to_string(),
            ));
        }
        if n != node_right(ctx, parent)? {
            break;
        }
        n = parent;
        parent = node_parent(ctx, n)?;
    }
    // root-was-rightmost case: the climb already stands on the header
    if node_right(ctx, n)? != parent {
        n = parent;
    }
    Ok(n)
}

fn decode_tree(
    ctx: &mut DecodeContext<'_>,
    value: &ValueHandle,
    element: Arc<TypeDescriptor>,
) -> Result<(), DecodeError> {
    if element.byte_size() == 0 {
        return Err(DecodeError::UnsizedType(element.name().to_string()));
    }
    // comparator, header {color, parent, left, right}, node count
    let fields = ctx.split("pipppp", value)?;
    let leftmost = field_ptr(&fields, 4)?;
    let count = field_u64(&fields, 5)? as usize;
    let header = value.address() + ctx.pointer_size() as u64;

    let cap = ctx.max_items();
    if count > cap {
        ctx.put_capped_item_count(cap);
    } else {
        ctx.put_item_count(count);
    }
    if !ctx.is_expanded() {
        return Ok(());
    }

    let ptr = ctx.pointer_size();
    let payload_off = align_up(4 * ptr, element.alignment());
    let limit = count.min(cap);
    let mut node = leftmost;
    for i in 0..limit {
        if node.is_null() || node == header {
            return Err(DecodeError::CorruptStructure(format!(
                "tree ended after {} of {} stated elements",
                i, limit
            )));
        }
        let item = ValueHandle::new(node + payload_off as u64, element.clone());
        ctx.put_child(&format!("[{}]", i), &item)?;
        if i + 1 < limit {
            node = successor(ctx, node)?;
        }
    }
    Ok(())
}

pub struct StdSet;

impl Decoder for StdSet {
    fn name(&self) -> &'static str {
        "std::set"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let element = value.type_arg(0)?;
        decode_tree(ctx, value, element)
    }
}

/// Same node layout, duplicate keys allowed; the decode is the set's.
pub struct StdMultiset;

impl Decoder for StdMultiset {
    fn name(&self) -> &'static str {
        "std::multiset"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        StdSet.decode(ctx, value)
    }
}

pub struct StdMap;

impl Decoder for StdMap {
    fn name(&self) -> &'static str {
        "std::map"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let key = value.type_arg(0)?;
        let mapped = value.type_arg(1)?;
        let element = TypeCatalog::synth_pair(&key, &mapped);
        decode_tree(ctx, value, element)
    }

    fn format_hints(&self) -> FormatHints {
        FormatHints::COMPACT_MAP
    }
}

pub struct StdMultimap;

impl Decoder for StdMultimap {
    fn name(&self) -> &'static str {
        "std::multimap"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        StdMap.decode(ctx, value)
    }

    fn format_hints(&self) -> FormatHints {
        FormatHints::COMPACT_MAP
    }
}
