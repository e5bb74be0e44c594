// Thu Feb 12 2026 - Alex

use crate::decode::{primitive, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::typeinfo::TypeCatalog;

/// `std::pair<F, S>`: two members at their natural offsets. Simple member
/// types are inlined into the one-line value.
pub struct StdPair;

impl Decoder for StdPair {
    fn name(&self) -> &'static str {
        "std::pair"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let first_ty = value.type_arg(0)?;
        let second_ty = value.type_arg(1)?;
        if first_ty.byte_size() == 0 || second_ty.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(value.type_name().to_string()));
        }
        let second_off = TypeCatalog::pair_second_offset(&first_ty, &second_ty);

        let first = value.at_offset(0, first_ty);
        let second = value.at_offset(second_off, second_ty);

        let briefs = (
            primitive::brief_value(ctx.reader(), &first),
            primitive::brief_value(ctx.reader(), &second),
        );
        if let (Some(a), Some(b)) = briefs {
            ctx.put_value(format!("({}, {})", a, b));
        }

        if ctx.is_expanded() {
            ctx.put_child("first", &first)?;
            ctx.put_child("second", &second)?;
        }
        Ok(())
    }
}
