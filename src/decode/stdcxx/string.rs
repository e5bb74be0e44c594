// Thu Feb 12 2026 - Alex

use crate::decode::{field_i64, field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::{FormatHints, Sentinel};
use crate::utils::escape_bytes;

/// GNU copy-on-write `std::string`/`std::wstring` (the pre-C++11 ABI):
/// the object is one pointer to the character data, and the shared rep
/// header `{length, capacity, refcount}` sits directly before the data.
pub struct StdString {
    name: &'static str,
    char_size: usize,
}

impl StdString {
    pub fn narrow() -> Self {
        Self {
            name: "std::string",
            char_size: 1,
        }
    }

    pub fn wide() -> Self {
        Self {
            name: "std::wstring",
            char_size: 4,
        }
    }
}

impl Decoder for StdString {
    fn name(&self) -> &'static str {
        self.name
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let data = ctx.extract_pointer(value.address())?;
        if data.is_null() {
            ctx.put_sentinel(Sentinel::Null);
            return Ok(());
        }

        let rep = data.offset(-(3 * ctx.pointer_size() as i64));
        let header = ctx.split_at("ppi", rep)?;
        let length = field_u64(&header, 0)? as usize;
        let capacity = field_u64(&header, 1)? as usize;
        let refcount = field_i64(&header, 2)?;
        // -1 marks a leaked (unshareable) rep and is legal
        if refcount < -1 {
            return Err(DecodeError::CorruptStructure(format!(
                "string refcount {}",
                refcount
            )));
        }
        if capacity < length {
            return Err(DecodeError::CorruptStructure(format!(
                "string capacity {} below length {}",
                capacity, length
            )));
        }

        let shown = length.min(ctx.config().max_string_length);
        let bytes = ctx.reader().read_bytes(data, shown * self.char_size)?;
        let text = if self.char_size == 1 {
            escape_bytes(&bytes)
        } else {
            bytes
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .map(|u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect()
        };
        let ellipsis = if shown < length { "..." } else { "" };
        ctx.put_value(format!("\"{}\"{}", text, ellipsis));
        Ok(())
    }

    fn format_hints(&self) -> FormatHints {
        FormatHints::UTF8_STRING | FormatHints::RAW_HEX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InspectConfig;
    use crate::decode::testutil::{session_over, session_with_config, ImageBuilder};
    use crate::display::ExpandSet;
    use crate::memory::Address;
    use crate::typeinfo::TypeCatalog;

    fn string_image(text: &[u8]) -> ImageBuilder {
        let mut image = ImageBuilder::new(0x1000);
        image.at(0x2000).u64(text.len() as u64).u64(64).i32(0).pad_to(8);
        let data = image.here();
        image.bytes(text);
        image.at(0x1000).ptr(data);
        image
    }

    #[test]
    fn test_plain_string() {
        let mut image = string_image(b"hello");
        let session = session_over(image.finish(), TypeCatalog::with_defaults(8));
        let value = session.value("std::string", Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::new())
            .unwrap();
        assert_eq!(node.display_value(), "\"hello\"");
    }

    #[test]
    fn test_null_data_pointer() {
        let mut image = ImageBuilder::new(0x1000);
        image.ptr(0);
        let session = session_over(image.finish(), TypeCatalog::with_defaults(8));
        let value = session.value("std::string", Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::new())
            .unwrap();
        assert_eq!(node.display_value(), "(null)");
    }

    #[test]
    fn test_truncated_display() {
        let mut image = string_image(b"abcdefgh");
        let config = InspectConfig {
            max_string_length: 4,
            ..InspectConfig::default()
        };
        let session = session_with_config(image.finish(), TypeCatalog::with_defaults(8), config);
        let value = session.value("std::string", Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::new())
            .unwrap();
        assert_eq!(node.display_value(), "\"abcd\"...");
    }

    #[test]
    fn test_escapes_control_bytes() {
        let mut image = string_image(b"a\nb");
        let session = session_over(image.finish(), TypeCatalog::with_defaults(8));
        let value = session.value("std::string", Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::new())
            .unwrap();
        assert_eq!(node.display_value(), "\"a\\nb\"");
    }

    #[test]
    fn test_bogus_refcount_is_corrupt() {
        let mut image = ImageBuilder::new(0x1000);
        image.at(0x2000).u64(3).u64(8).i32(-7).pad_to(8);
        let data = image.here();
        image.bytes(b"abc");
        image.at(0x1000).ptr(data);
        let session = session_over(image.finish(), TypeCatalog::with_defaults(8));
        let value = session.value("std::string", Address::new(0x1000)).unwrap();
        assert!(matches!(
            session.try_describe("value", &value, &ExpandSet::new()),
            Err(DecodeError::CorruptStructure(_))
        ));
    }

    #[test]
    fn test_wide_string() {
        let mut image = ImageBuilder::new(0x1000);
        image.at(0x2000).u64(2).u64(8).i32(1).pad_to(8);
        let data = image.here();
        image.u32('h' as u32).u32('i' as u32);
        image.at(0x1000).ptr(data);
        let session = session_over(image.finish(), TypeCatalog::with_defaults(8));
        let value = session.value("std::wstring", Address::new(0x1000)).unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::new())
            .unwrap();
        assert_eq!(node.display_value(), "\"hi\"");
    }
}
