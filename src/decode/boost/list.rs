// Tue Feb 10 2026 - Alex

use crate::codec::align_up;
use crate::decode::{field_ptr, field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};

/// `boost::container::list<T>`: intrusive circular list with the size
/// stored next to the header, nodes `{next, prev, payload}`. The stated
/// size drives the walk; the chain breaking before that many nodes is a
/// corruption signal, not an early stop.
pub struct BoostContainerList;

impl Decoder for BoostContainerList {
    fn name(&self) -> &'static str {
        "boost::container::list"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let element = value.type_arg(0)?;
        if element.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(element.name().to_string()));
        }
        let fields = ctx.split("ppp", value)?;
        let first = field_ptr(&fields, 0)?;
        let count = field_u64(&fields, 2)? as usize;

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
        let payload_off = align_up(2 * ptr, element.alignment());
        let header = value.address();
        let limit = count.min(cap);
        let mut node = first;
        for i in 0..limit {
            if node.is_null() || node == header {
                return Err(DecodeError::CorruptStructure(format!(
                    "list ended after {} of {} stated elements",
                    i, limit
                )));
            }
            let item = ValueHandle::new(node + payload_off as u64, element.clone());
            ctx.put_child(&format!("[{}]", i), &item)?;
            node = ctx.extract_pointer(node)?;
        }
        Ok(())
    }
}
