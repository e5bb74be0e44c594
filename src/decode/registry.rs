// Mon Feb 09 2026 - Alex

use crate::decode::{boost, stdcxx, Decoder};
use crate::display::FormatHints;
use indexmap::IndexMap;

/// Explicit dispatch table from normalized generic type name to decoder.
/// Built once per session; insertion order is kept so listings are stable.
pub struct DecoderRegistry {
    decoders: IndexMap<String, Box<dyn Decoder>>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self {
            decoders: IndexMap::new(),
        }
    }

    /// Registry with every built-in Boost and GNU libstdc++ decoder.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(boost::BoostOptional));
        registry.register(Box::new(boost::BoostVariant));
        registry.register(Box::new(boost::BoostSharedPtr));
        registry.register(Box::new(boost::BoostUnorderedSet));
        registry.register(Box::new(boost::BoostUnorderedMap));
        registry.register(Box::new(boost::BoostContainerList));
        registry.register(Box::new(boost::BoostBimap));
        registry.register(Box::new(boost::BoostGregorianDate));
        registry.register(Box::new(boost::BoostPtime));
        registry.register(Box::new(boost::BoostTimeDuration));
        registry.register(Box::new(stdcxx::StdString::narrow()));
        registry.register(Box::new(stdcxx::StdString::wide()));
        registry.register(Box::new(stdcxx::StdVector));
        registry.register(Box::new(stdcxx::StdList));
        registry.register(Box::new(stdcxx::StdPair));
        registry.register(Box::new(stdcxx::StdSet));
        registry.register(Box::new(stdcxx::StdMultiset));
        registry.register(Box::new(stdcxx::StdMap));
        registry.register(Box::new(stdcxx::StdMultimap));
        registry
    }

    pub fn register(&mut self, decoder: Box<dyn Decoder>) {
        let name = decoder.name().to_string();
        if self.decoders.insert(name.clone(), decoder).is_some() {
            log::warn!("Replacing decoder registered for '{}'", name);
        }
    }

    pub fn lookup(&self, generic_name: &str) -> Option<&dyn Decoder> {
        self.decoders.get(generic_name).map(Box::as_ref)
    }

    pub fn format_hints(&self, generic_name: &str) -> FormatHints {
        self.lookup(generic_name)
            .map(|d| d.format_hints())
            .unwrap_or(FormatHints::empty())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.decoders.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = DecoderRegistry::builtin();
        assert!(registry.lookup("boost::optional").is_some());
        assert!(registry.lookup("boost::unordered::unordered_set").is_some());
        assert!(registry.lookup("std::multimap").is_some());
        assert!(registry.lookup("boost::nothing").is_none());
    }

    #[test]
    fn test_listing_is_stable() {
        let a: Vec<String> = DecoderRegistry::builtin().names().map(String::from).collect();
        let b: Vec<String> = DecoderRegistry::builtin().names().map(String::from).collect();
        assert_eq!(a, b);
        assert_eq!(a.first().map(String::as_str), Some("boost::optional"));
    }

    #[test]
    fn test_map_hints_compact() {
        let registry = DecoderRegistry::builtin();
        assert!(registry
            .format_hints("std::map")
            .contains(FormatHints::COMPACT_MAP));
        assert!(registry.format_hints("unknown::type").is_empty());
    }
}
