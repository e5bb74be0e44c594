// Thu Feb 12 2026 - Alex

use crate::codec::align_up;
use crate::decode::{DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::memory::Address;

/// GNU `std::list<T>`: circular doubly-linked nodes around a sentinel
/// header with no stored size. The count comes from walking the chain,
/// saturating at the traversal cap instead of chasing a corrupted loop.
pub struct StdList;

impl Decoder for StdList {
    fn name(&self) -> &'static str {
        "std::list"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let element = value.type_arg(0)?;
        if element.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(element.name().to_string()));
        }

        let header = value.address();
        let cap = ctx.max_items();
        let mut nodes: Vec<Address> = Vec::new();
        let mut node = ctx.extract_pointer(header)?;
        let mut saturated = false;
        while node != header {
            if node.is_null() {
                return Err(DecodeError::CorruptStructure(
                    "list chain broke before returning to the header".to_string(),
                ));
            }
            if nodes.len() == cap {
                saturated = true;
                break;
            }
            nodes.push(node);
            node = ctx.extract_pointer(node)?;
        }

        if saturated {
            ctx.put_capped_item_count(cap);
        } else {
            ctx.put_item_count(nodes.len());
        }
        if !ctx.is_expanded() {
            return Ok(());
        }

        let payload_off = align_up(2 * ctx.pointer_size(), element.alignment());
        for (i, node) in nodes.iter().enumerate() {
            let item = ValueHandle::new(*node + payload_off as u64, element.clone());
            ctx.put_child(&format!("[{}]", i), &item)?;
        }
        Ok(())
    }
}
