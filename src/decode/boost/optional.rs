// Tue Feb 10 2026 - Alex

use crate::codec::align_up;
use crate::decode::{field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::Sentinel;

/// `boost::optional<T>`: a leading bool flag, then the payload at T's
/// alignment. An unset flag means the payload bytes are meaningless and
/// must not be decoded.
pub struct BoostOptional;

impl Decoder for BoostOptional {
    fn name(&self) -> &'static str {
        "boost::optional"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let inner = value.type_arg(0)?;
        if inner.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(inner.name().to_string()));
        }
        let fields = ctx.split("b", value)?;
        if field_u64(&fields, 0)? == 0 {
            ctx.put_sentinel(Sentinel::Uninitialized);
            return Ok(());
        }
        let offset = align_up(1, inner.alignment());
        let payload = value.at_offset(offset, inner);
        ctx.put_item(&payload)?;
        ctx.put_type_name(value.type_name());
        Ok(())
    }
}
