// Tue Feb 10 2026 - Alex

use crate::codec::align_up;
use crate::decode::{field_i64, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::typeinfo::TemplateArg;

/// `boost::variant<T...>`: a leading int discriminant indexing the
/// template-argument list, then the active alternative's payload in
/// storage aligned for the widest alternative.
pub struct BoostVariant;

impl Decoder for BoostVariant {
    fn name(&self) -> &'static str {
        "boost::variant"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let fields = ctx.split("i", value)?;
        let which = field_i64(&fields, 0)?;
        let arity = value.type_desc().type_arg_count();
        if which < 0 || which as usize >= arity {
            return Err(DecodeError::BadDiscriminant {
                type_name: value.type_name().to_string(),
                got: which,
                arity,
            });
        }

        let alternative = value.type_arg(which as usize)?;
        if alternative.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(alternative.name().to_string()));
        }

        let storage_align = value
            .type_desc()
            .template_args()
            .iter()
            .filter_map(|a| match a {
                TemplateArg::Type(t) => Some(t.alignment()),
                TemplateArg::Integral(_) => None,
            })
            .max()
            .unwrap_or(1);
        let offset = align_up(4, storage_align);

        ctx.put_item(&value.at_offset(offset, alternative))?;
        ctx.put_type_name(value.type_name());
        Ok(())
    }
}
