// Wed Feb 11 2026 - Alex

use crate::codec::align_up;
use crate::decode::{field_ptr, field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::FormatHints;
use crate::layout::UnorderedLayout;
use crate::memory::Address;
use crate::typeinfo::{TypeCatalog, TypeDescriptor};
use std::sync::Arc;

/// Table fields shared by every unordered layout once the variant-specific
/// slot order has been unpacked.
struct UnorderedTable {
    bucket_count: u64,
    size: u64,
    buckets: Address,
    /// Forward-scheme list head; absent for chained-bucket layouts.
    head: Option<Address>,
}

fn iterator_arity(ctx: &DecodeContext<'_>, value: &ValueHandle) -> Option<usize> {
    let name = format!("{}::iterator", value.type_name());
    ctx.catalog().lookup(&name).map(|d| d.template_arity())
}

fn read_table(
    ctx: &DecodeContext<'_>,
    value: &ValueHandle,
    layout: UnorderedLayout,
) -> Result<UnorderedTable, DecodeError> {
    let units = value.type_desc().byte_size() / ctx.pointer_size();
    let fields = ctx.split(layout.table_format(units), value)?;
    let table = match layout {
        UnorderedLayout::V1_48 => UnorderedTable {
            buckets: field_ptr(&fields, 0)?,
            bucket_count: field_u64(&fields, 1)?,
            size: field_u64(&fields, 3)?,
            head: None,
        },
        UnorderedLayout::V1_55 => UnorderedTable {
            buckets: field_ptr(&fields, 0)?,
            bucket_count: field_u64(&fields, 1)?,
            size: field_u64(&fields, 2)?,
            head: None,
        },
        UnorderedLayout::V1_58Plus => {
            let (buckets, head) = if units == 6 {
                (field_ptr(&fields, 4)?, field_ptr(&fields, 5)?)
            } else {
                (field_ptr(&fields, 3)?, field_ptr(&fields, 4)?)
            };
            UnorderedTable {
                bucket_count: field_u64(&fields, 0)?,
                size: field_u64(&fields, 1)?,
                buckets,
                head: Some(head),
            }
        }
    };
    Ok(table)
}

/// Walks the container's nodes in display order, emitting one child per
/// element. Nodes carry a `{next, hash}` header before the payload in
/// every known layout.
fn decode_unordered(
    ctx: &mut DecodeContext<'_>,
    value: &ValueHandle,
    element: Arc<TypeDescriptor>,
) -> Result<(), DecodeError> {
    if element.byte_size() == 0 {
        return Err(DecodeError::UnsizedType(element.name().to_string()));
    }
    let ptr = ctx.pointer_size();
    let layout = UnorderedLayout::classify(
        value.type_desc().byte_size(),
        ptr,
        iterator_arity(ctx, value),
    )?;
    log::debug!(
        "{}: classified as {:?}",
        value.type_name(),
        layout
    );
    let table = read_table(ctx, value, layout)?;

    let cap = ctx.max_items();
    let count = table.size as usize;
    if count > cap {
        ctx.put_capped_item_count(cap);
    } else {
        ctx.put_item_count(count);
    }
    if !ctx.is_expanded() {
        return Ok(());
    }

    let limit = count.min(cap);
    let payload_off = align_up(2 * ptr, element.alignment());
    let mut emitted = 0usize;

    match table.head {
        Some(head) => {
            let mut node = head;
            while !node.is_null() && emitted < limit {
                let item = ValueHandle::new(node + payload_off as u64, element.clone());
                ctx.put_child(&format!("[{}]", emitted), &item)?;
                node = ctx.extract_pointer(node)?;
                emitted += 1;
            }
        }
        None => {
            if table.bucket_count as usize > ctx.config().max_buckets {
                return Err(DecodeError::CorruptStructure(format!(
                    "implausible bucket count {}",
                    table.bucket_count
                )));
            }
            if table.buckets.is_null() && limit > 0 {
                return Err(DecodeError::CorruptStructure(
                    "null bucket array with nonzero size".to_string(),
                ));
            }
            'buckets: for b in 0..table.bucket_count {
                let mut node = ctx.extract_pointer(table.buckets + b * ptr as u64)?;
                while !node.is_null() {
                    if emitted >= limit {
                        break 'buckets;
                    }
                    let item = ValueHandle::new(node + payload_off as u64, element.clone());
                    ctx.put_child(&format!("[{}]", emitted), &item)?;
                    node = ctx.extract_pointer(node)?;
                    emitted += 1;
                }
            }
        }
    }

    if emitted < limit {
        return Err(DecodeError::CorruptStructure(format!(
            "found {} elements where the table claims {}",
            emitted, limit
        )));
    }
    Ok(())
}

pub struct BoostUnorderedSet;

impl Decoder for BoostUnorderedSet {
    fn name(&self) -> &'static str {
        "boost::unordered::unordered_set"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let element = value.type_arg(0)?;
        decode_unordered(ctx, value, element)
    }
}

pub struct BoostUnorderedMap;

impl Decoder for BoostUnorderedMap {
    fn name(&self) -> &'static str {
        "boost::unordered::unordered_map"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let key = value.type_arg(0)?;
        let mapped = value.type_arg(1)?;
        let element = TypeCatalog::synth_pair(&key, &mapped);
        decode_unordered(ctx, value, element)
    }

    fn format_hints(&self) -> FormatHints {
        FormatHints::COMPACT_MAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::testutil::{session_over, ImageBuilder};
    use crate::display::ExpandSet;
    use crate::typeinfo::TypeCatalog;

    const SET_48: &str = "boost::unordered::unordered_set<int>";

    fn child_values(node: &crate::display::DisplayNode) -> Vec<String> {
        node.children.iter().map(|c| c.display_value()).collect()
    }

    /// Forward scheme (1.58+, 5-slot table): one singly linked node list.
    #[test]
    fn test_forward_layout_decodes_in_list_order() {
        let mut image = ImageBuilder::new(0x1000);
        // three nodes: {next, hash, payload}
        image.at(0x2000).ptr(0x2020).ptr(0).i32(10).pad_to(8);
        image.at(0x2020).ptr(0x2040).ptr(0).i32(20).pad_to(8);
        image.at(0x2040).ptr(0).ptr(0).i32(30).pad_to(8);
        // table: bucket_count, size, mlf, buckets, head
        image.at(0x1000).ptr(4).ptr(3).f32(1.0).pad_to(8).ptr(0x5000).ptr(0x2000);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 40);
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .unwrap();
        assert_eq!(node.display_value(), "<3 items>");
        assert_eq!(node.child_count, Some(3));
        assert_eq!(child_values(&node), vec!["10", "20", "30"]);
    }

    /// 6-slot table with a one-argument iterator type is still the
    /// forward scheme.
    #[test]
    fn test_six_slot_forward_layout() {
        let mut image = ImageBuilder::new(0x1000);
        image.at(0x2000).ptr(0).ptr(0).i32(99).pad_to(8);
        // table: bucket_count, size, mlf, max_load, buckets, head
        image
            .at(0x1000)
            .ptr(4)
            .ptr(1)
            .f32(1.0)
            .pad_to(8)
            .ptr(4)
            .ptr(0x5000)
            .ptr(0x2000);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 48);
        catalog.add_alias(
            "boost::unordered::unordered_set<int>::iterator",
            "boost::unordered::iterator_detail::iterator<boost::unordered::detail::ptr_node<int>*>",
            8,
        );
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .unwrap();
        assert_eq!(child_values(&node), vec!["99"]);
    }

    /// Grouped-bucket scheme (1.55, 6-slot table, two-argument iterator):
    /// bucket array with per-bucket chains.
    #[test]
    fn test_grouped_bucket_layout() {
        let mut image = ImageBuilder::new(0x1000);
        // bucket array of 4, entries in buckets 1 and 3
        image.at(0x3000).ptr(0).ptr(0x2000).ptr(0).ptr(0x2040);
        // bucket 1 chain: 7 then 8
        image.at(0x2000).ptr(0x2020).ptr(0).i32(7).pad_to(8);
        image.at(0x2020).ptr(0).ptr(0).i32(8).pad_to(8);
        // bucket 3 chain: 9
        image.at(0x2040).ptr(0).ptr(0).i32(9).pad_to(8);
        // table: buckets, bucket_count, size, mlf, max_load
        image.at(0x1000).ptr(0x3000).ptr(4).ptr(3).f32(1.0).pad_to(8).ptr(4);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 48);
        catalog.add_alias(
            "boost::unordered::unordered_set<int>::iterator",
            "boost::unordered::iterator_detail::iterator<boost::unordered::detail::ptr_node<int>*, int>",
            8,
        );
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .unwrap();
        assert_eq!(node.display_value(), "<3 items>");
        assert_eq!(child_values(&node), vec!["7", "8", "9"]);
    }

    /// Oldest scheme (1.48, 7-slot table with cached begin bucket).
    #[test]
    fn test_cached_begin_layout() {
        let mut image = ImageBuilder::new(0x1000);
        image.at(0x3000).ptr(0x2000).ptr(0);
        image.at(0x2000).ptr(0).ptr(0).i32(5).pad_to(8);
        // table: buckets, bucket_count, cached_begin, size, mlf, max_load
        image
            .at(0x1000)
            .ptr(0x3000)
            .ptr(2)
            .ptr(0x3000)
            .ptr(1)
            .f32(1.0)
            .pad_to(8)
            .ptr(2);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 56);
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .unwrap();
        assert_eq!(child_values(&node), vec!["5"]);
    }

    /// A table size matching no known variant refuses to decode, and the
    /// host-side entry point falls back to the raw dump.
    #[test]
    fn test_unknown_table_size_fails_fast() {
        let mut image = ImageBuilder::new(0x1000);
        image.ptr(1).ptr(2).ptr(3).ptr(4);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 32);
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        let err = session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Layout(_)));

        let node = session.describe("value", &value, &ExpandSet::to_depth(1));
        assert!(node.value.as_deref().unwrap_or("").starts_with("<raw"));
        assert!(node.children.is_empty());
    }

    /// Six-slot table with no iterator type registered cannot be
    /// disambiguated and must not guess.
    #[test]
    fn test_ambiguous_six_slot_table() {
        let mut image = ImageBuilder::new(0x1000);
        image.ptr(0).ptr(0).ptr(0).ptr(0).ptr(0).ptr(0);
        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 48);
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        assert!(session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .is_err());
    }

    #[test]
    fn test_decode_is_idempotent() {
        let mut image = ImageBuilder::new(0x1000);
        image.at(0x2000).ptr(0).ptr(0).i32(11).pad_to(8);
        image.at(0x1000).ptr(4).ptr(1).f32(1.0).pad_to(8).ptr(0x5000).ptr(0x2000);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class(SET_48, 40);
        let session = session_over(image.finish(), catalog);

        let value = session.value(SET_48, Address::new(0x1000)).unwrap();
        let expansion = ExpandSet::to_depth(2);
        let first = session.try_describe("value", &value, &expansion).unwrap();
        let second = session.try_describe("value", &value, &expansion).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unordered_map_pairs() {
        let mut image = ImageBuilder::new(0x1000);
        // node payload is pair<int, int>
        image.at(0x2000).ptr(0x2020).ptr(0).i32(1).i32(100);
        image.at(0x2020).ptr(0).ptr(0).i32(2).i32(200);
        image.at(0x1000).ptr(4).ptr(2).f32(1.0).pad_to(8).ptr(0x5000).ptr(0x2000);

        let mut catalog = TypeCatalog::new(8);
        catalog.add_class("boost::unordered::unordered_map<int, int>", 40);
        let session = session_over(image.finish(), catalog);

        let value = session
            .value("boost::unordered::unordered_map<int, int>", Address::new(0x1000))
            .unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::to_depth(2))
            .unwrap();
        assert_eq!(node.child_count, Some(2));
        let first = &node.children[0];
        assert_eq!(first.children.len(), 2);
        assert_eq!(first.children[0].name, "first");
        assert_eq!(first.children[0].display_value(), "1");
        assert_eq!(first.children[1].display_value(), "100");
    }
}
