// Tue Feb 10 2026 - Alex

use crate::decode::{field_u64, DecodeContext, DecodeError, Decoder, ValueHandle};

/// `boost::bimaps::bimap<L, R>`: count-only display. The element count
/// lives in the core's node_count slot behind the 3-pointer set header;
/// the paired views are left to the generic member dump.
pub struct BoostBimap;

impl Decoder for BoostBimap {
    fn name(&self) -> &'static str {
        "boost::bimaps::bimap"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let offset = 3 * ctx.pointer_size();
        let fields = ctx.split_at("p", value.address() + offset as u64)?;
        let count = field_u64(&fields, 0)?;
        let noun = if count == 1 { "item" } else { "items" };
        ctx.put_value(format!("<{} {}>", count, noun));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::testutil::{session_over, ImageBuilder};
    use crate::display::ExpandSet;
    use crate::memory::Address;
    use crate::typeinfo::TypeCatalog;

    #[test]
    fn test_count_only() {
        let mut image = ImageBuilder::new(0x1000);
        image.ptr(0).ptr(0).ptr(0).ptr(12);
        let mut catalog = TypeCatalog::with_defaults(8);
        catalog.add_class("boost::bimaps::bimap<int, std::string>", 32);
        let session = session_over(image.finish(), catalog);

        let value = session
            .value("boost::bimaps::bimap<int, std::string>", Address::new(0x1000))
            .unwrap();
        let node = session
            .try_describe("value", &value, &ExpandSet::to_depth(1))
            .unwrap();
        assert_eq!(node.display_value(), "<12 items>");
        assert!(node.children.is_empty());
        assert_eq!(node.child_count, None);
    }
}
