// Wed Feb 04 2026 - Alex

use crate::codec::{CodecError, FieldValue};
use crate::memory::{Address, MemoryError, MemoryReader};
use crate::typeinfo::{TypeCatalog, TypeDescriptor};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum FieldKind {
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Pointer,
    Typed(Arc<TypeDescriptor>),
}

impl FieldKind {
    fn size(&self, pointer_size: usize) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::I16 | FieldKind::U16 => 2,
            FieldKind::I32 | FieldKind::U32 | FieldKind::F32 => 4,
            FieldKind::I64 | FieldKind::U64 | FieldKind::F64 => 8,
            FieldKind::Pointer => pointer_size,
            FieldKind::Typed(t) => t.byte_size(),
        }
    }

    fn alignment(&self, pointer_size: usize) -> usize {
        match self {
            FieldKind::Typed(t) => t.alignment().max(1),
            other => other.size(pointer_size).max(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    kind: FieldKind,
    offset: usize,
    size: usize,
}

impl FieldSpec {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// A parsed struct-format string. Format characters:
///
///   b  u8          h/H  i16/u16      i/I  i32/u32
///   q/Q  i64/u64   f/d  f32/f64      p    pointer
///   {TypeName}     embedded typed field (size/alignment from the catalog)
///
/// Every field lands on its natural alignment; `@` is accepted between
/// fields as a readability marker for an alignment gap.
#[derive(Debug, Clone)]
pub struct StructFormat {
    fields: Vec<FieldSpec>,
    size: usize,
}

impl StructFormat {
    pub fn parse(fmt: &str, catalog: &TypeCatalog) -> Result<Self, CodecError> {
        let pointer_size = catalog.pointer_size();
        let mut kinds = Vec::new();
        let mut chars = fmt.char_indices();
        while let Some((i, c)) = chars.next() {
            let kind = match c {
                'b' => FieldKind::U8,
                'h' => FieldKind::I16,
                'H' => FieldKind::U16,
                'i' => FieldKind::I32,
                'I' => FieldKind::U32,
                'q' => FieldKind::I64,
                'Q' => FieldKind::U64,
                'f' => FieldKind::F32,
                'd' => FieldKind::F64,
                'p' => FieldKind::Pointer,
                '@' | ' ' => continue,
                '{' => {
                    let rest = &fmt[i + 1..];
                    let close = rest.find('}').ok_or(CodecError::UnterminatedBrace)?;
                    let name = &rest[..close];
                    for _ in 0..close + 1 {
                        chars.next();
                    }
                    let ty = catalog.resolve(name);
                    if ty.byte_size() == 0 {
                        return Err(CodecError::UnsizedEmbeddedType(name.to_string()));
                    }
                    FieldKind::Typed(ty)
                }
                other => return Err(CodecError::UnknownFormatChar(other)),
            };
            kinds.push(kind);
        }

        let mut fields = Vec::with_capacity(kinds.len());
        let mut offset = 0usize;
        let mut max_align = 1usize;
        for kind in kinds {
            let align = kind.alignment(pointer_size);
            let size = kind.size(pointer_size);
            offset = (offset + align - 1) / align * align;
            fields.push(FieldSpec { kind, offset, size });
            offset += size;
            max_align = max_align.max(align);
        }
        let size = (offset + max_align - 1) / max_align * max_align;
        Ok(Self { fields, size })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Total extent of the format, padded to the widest field alignment.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn read(
        &self,
        reader: &dyn MemoryReader,
        base: Address,
    ) -> Result<Vec<FieldValue>, MemoryError> {
        let mut out = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
            let addr = base + spec.offset as u64;
            let value = match &spec.kind {
                FieldKind::U8 => FieldValue::Unsigned(reader.read_u8(addr)? as u64),
                FieldKind::I16 => FieldValue::Signed(reader.read_i16(addr)? as i64),
                FieldKind::U16 => FieldValue::Unsigned(reader.read_u16(addr)? as u64),
                FieldKind::I32 => FieldValue::Signed(reader.read_i32(addr)? as i64),
                FieldKind::U32 => FieldValue::Unsigned(reader.read_u32(addr)? as u64),
                FieldKind::I64 => FieldValue::Signed(reader.read_i64(addr)?),
                FieldKind::U64 => FieldValue::Unsigned(reader.read_u64(addr)?),
                FieldKind::F32 => FieldValue::Float(reader.read_f32(addr)? as f64),
                FieldKind::F64 => FieldValue::Float(reader.read_f64(addr)?),
                FieldKind::Pointer => FieldValue::Pointer(reader.read_ptr(addr)?),
                FieldKind::Typed(ty) => FieldValue::Typed { addr, ty: ty.clone() },
            };
            out.push(value);
        }
        Ok(out)
    }
}
