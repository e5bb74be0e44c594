// Tue Feb 10 2026 - Alex

use crate::decode::{field_i64, field_ptr, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::Sentinel;

/// `boost::shared_ptr<T>`: the managed pointer and the shared-count
/// control block `{vptr, use_count, weak_count}`. Either pointer being
/// null short-circuits to "(null)" before anything is dereferenced.
pub struct BoostSharedPtr;

impl Decoder for BoostSharedPtr {
    fn name(&self) -> &'static str {
        "boost::shared_ptr"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let fields = ctx.split("pp", value)?;
        let px = field_ptr(&fields, 0)?;
        let pn = field_ptr(&fields, 1)?;
        if px.is_null() || pn.is_null() {
            ctx.put_sentinel(Sentinel::Null);
            return Ok(());
        }

        let control = ctx.split_at("pii", pn)?;
        let use_count = field_i64(&control, 1)?;
        if use_count <= 0 {
            ctx.put_sentinel(Sentinel::Invalid);
            return Ok(());
        }

        let pointee = value.type_arg(0)?;
        if pointee.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(pointee.name().to_string()));
        }
        ctx.put_item(&ValueHandle::new(px, pointee))?;
        ctx.put_type_name(value.type_name());
        Ok(())
    }
}
