// Mon Feb 09 2026 - Alex

use crate::decode::{DecodeContext, DecodeError, ValueHandle};
use crate::display::Sentinel;
use crate::memory::{Address, MemoryError, MemoryReader};
use crate::typeinfo::{PrimitiveType, TypeKind};
use crate::utils::hex_string;

pub(crate) fn scalar_string(
    reader: &dyn MemoryReader,
    addr: Address,
    p: PrimitiveType,
) -> Result<String, MemoryError> {
    let s = match p {
        PrimitiveType::Bool => {
            if reader.read_u8(addr)? != 0 {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        PrimitiveType::Char => {
            let b = reader.read_u8(addr)?;
            if (0x20..0x7f).contains(&b) {
                format!("{} '{}'", b, b as char)
            } else {
                format!("{}", b)
            }
        }
        PrimitiveType::SChar => format!("{}", reader.read_i8(addr)?),
        PrimitiveType::UChar => format!("{}", reader.read_u8(addr)?),
        PrimitiveType::WChar => {
            let v = reader.read_u32(addr)?;
            match char::from_u32(v).filter(|c| !c.is_control()) {
                Some(c) => format!("{} '{}'", v, c),
                None => format!("{}", v),
            }
        }
        PrimitiveType::I16 => format!("{}", reader.read_i16(addr)?),
        PrimitiveType::U16 => format!("{}", reader.read_u16(addr)?),
        PrimitiveType::I32 => format!("{}", reader.read_i32(addr)?),
        PrimitiveType::U32 => format!("{}", reader.read_u32(addr)?),
        PrimitiveType::I64 => format!("{}", reader.read_i64(addr)?),
        PrimitiveType::U64 => format!("{}", reader.read_u64(addr)?),
        PrimitiveType::F32 => format!("{}", reader.read_f32(addr)?),
        PrimitiveType::F64 => format!("{}", reader.read_f64(addr)?),
    };
    Ok(s)
}

/// One-line rendering for types simple enough to inline into a parent's
/// value column. Containers and classes decline.
pub(crate) fn brief_value(
    reader: &dyn MemoryReader,
    value: &ValueHandle,
) -> Option<String> {
    match value.type_desc().kind() {
        TypeKind::Primitive(p) => scalar_string(reader, value.address(), *p).ok(),
        TypeKind::Pointer => {
            let target = reader.read_ptr(value.address()).ok()?;
            if target.is_null() {
                Some(Sentinel::Null.to_string())
            } else {
                Some(format!("0x{:x}", target))
            }
        }
        _ => None,
    }
}

/// Decode for values without a registered container decoder: scalars,
/// pointers, enums, and a bounded hex dump for everything opaque.
pub(crate) fn decode_leaf(
    ctx: &mut DecodeContext<'_>,
    value: &ValueHandle,
) -> Result<(), DecodeError> {
    let ty = value.type_desc().clone();
    match ty.kind() {
        TypeKind::Primitive(p) => {
            let s = scalar_string(ctx.reader(), value.address(), *p)?;
            ctx.put_value(s);
        }
        TypeKind::Pointer => {
            let target = ctx.extract_pointer(value.address())?;
            if target.is_null() {
                ctx.put_sentinel(Sentinel::Null);
                return Ok(());
            }
            ctx.put_value(format!("0x{:x}", target));
            if let Some(pointee) = ty.pointee() {
                if pointee.byte_size() > 0 && ctx.is_expanded() {
                    ctx.put_child("*", &ValueHandle::new(target, pointee.clone()))?;
                }
            }
        }
        TypeKind::Enum => {
            let raw = ctx.reader().read_i32(value.address())?;
            ctx.put_value(format!("{}", raw));
        }
        TypeKind::Class | TypeKind::Unknown => {
            let size = ty.byte_size();
            if size == 0 {
                ctx.put_value("<opaque>");
            } else {
                let shown = size.min(ctx.config().max_raw_bytes);
                let bytes = ctx.reader().read_bytes(value.address(), shown)?;
                let ellipsis = if shown < size { " ..." } else { "" };
                ctx.put_value(format!("<{} bytes> {}{}", size, hex_string(&bytes), ellipsis));
            }
        }
    }
    Ok(())
}
