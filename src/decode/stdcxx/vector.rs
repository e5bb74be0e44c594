// Thu Feb 12 2026 - Alex

use crate::decode::{field_ptr, field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::FormatHints;

/// GNU `std::vector<T>`: three pointers `{start, finish, end_of_storage}`
/// with the size recovered from the pointer difference. `vector<bool>`
/// packs bits into size_t words behind `{word*, offset}` iterators.
pub struct StdVector;

impl Decoder for StdVector {
    fn name(&self) -> &'static str {
        "std::vector"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let element = value.type_arg(0)?;
        if element.name() == "bool" {
            return decode_bit_vector(ctx, value);
        }
        if element.byte_size() == 0 {
            return Err(DecodeError::UnsizedType(element.name().to_string()));
        }

        let fields = ctx.split("ppp", value)?;
        let start = field_ptr(&fields, 0)?;
        let finish = field_ptr(&fields, 1)?;
        let storage_end = field_ptr(&fields, 2)?;

        let byte_len = finish - start;
        if byte_len < 0 || storage_end - finish < 0 {
            return Err(DecodeError::CorruptStructure(
                "vector pointers out of order".to_string(),
            ));
        }
        let elem_size = element.byte_size();
        if byte_len as usize % elem_size != 0 {
            return Err(DecodeError::CorruptStructure(format!(
                "vector extent {} is not a multiple of element size {}",
                byte_len, elem_size
            )));
        }

        let count = byte_len as usize / elem_size;
        let cap = ctx.max_items();
        if count > cap {
            ctx.put_capped_item_count(cap);
        } else {
            ctx.put_item_count(count);
        }
        if !ctx.is_expanded() {
            return Ok(());
        }
        for i in 0..count.min(cap) {
            let item = ValueHandle::new(start + (i * elem_size) as u64, element.clone());
            ctx.put_child(&format!("[{}]", i), &item)?;
        }
        Ok(())
    }

    fn format_hints(&self) -> FormatHints {
        FormatHints::ARRAY_PLOT | FormatHints::RAW_HEX
    }
}

fn decode_bit_vector(ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
    let ptr = ctx.pointer_size();
    let word_bits = (8 * ptr) as u64;
    // iterators: {word*, bit offset}, then the storage end pointer
    let fields = ctx.split("pIpIp", value)?;
    let start_word = field_ptr(&fields, 0)?;
    let start_bit = field_u64(&fields, 1)?;
    let finish_word = field_ptr(&fields, 2)?;
    let finish_bit = field_u64(&fields, 3)?;

    let word_delta = finish_word - start_word;
    if word_delta < 0 || word_delta as u64 % ptr as u64 != 0 || start_bit >= word_bits {
        return Err(DecodeError::CorruptStructure(
            "bit-vector iterators out of order".to_string(),
        ));
    }
    let total = (word_delta as u64 / ptr as u64) * word_bits + finish_bit - start_bit;
    let count = total as usize;

    let cap = ctx.max_items();
    if count > cap {
        ctx.put_capped_item_count(cap);
    } else {
        ctx.put_item_count(count);
    }
    if !ctx.is_expanded() {
        return Ok(());
    }
    for i in 0..count.min(cap) {
        let bit_index = start_bit + i as u64;
        let word_addr = start_word + bit_index / word_bits * ptr as u64;
        // bit words are size_t wide, so read them like pointers
        let word = ctx.extract_pointer(word_addr)?.as_u64();
        let set = word >> (bit_index % word_bits) & 1 != 0;
        ctx.put_child_value(
            &format!("[{}]", i),
            "bool",
            if set { "true" } else { "false" }.to_string(),
            word_addr,
        );
    }
    Ok(())
}
