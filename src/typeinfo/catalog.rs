// Tue Feb 03 2026 - Alex

use crate::typeinfo::parser::{normalize_name, parse_integral, split_template};
use crate::typeinfo::{PrimitiveType, TemplateArg, TypeDescriptor, TypeKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Type entry '{0}' has zero size")]
    ZeroSize(String),
    #[error("Unsupported pointer size {0} in catalog")]
    BadPointerSize(usize),
    #[error("Unknown type kind '{kind}' on entry '{name}'")]
    UnknownKind { name: String, kind: String },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_pointer_size")]
    pointer_size: usize,
    types: Vec<TypeEntry>,
}

fn default_pointer_size() -> usize {
    8
}

#[derive(Debug, Deserialize)]
struct TypeEntry {
    name: String,
    size: usize,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    align: Option<usize>,
    /// Alias target: the entry is registered under `name` but described by
    /// this spelling (used for nested typedefs like a set's iterator).
    #[serde(default)]
    definition: Option<String>,
}

/// Interning store for type descriptors, keyed by normalized name. Stands
/// in for the debug-info lookups a live debugger backend would answer.
pub struct TypeCatalog {
    types: HashMap<String, Arc<TypeDescriptor>>,
    pointer_size: usize,
}

impl TypeCatalog {
    pub fn new(pointer_size: usize) -> Self {
        assert!(pointer_size == 4 || pointer_size == 8, "pointer size must be 4 or 8");
        Self {
            types: HashMap::new(),
            pointer_size,
        }
    }

    /// Catalog pre-seeded with the types every GNU-ABI target has, so
    /// callers only register what their dump actually contains.
    pub fn with_defaults(pointer_size: usize) -> Self {
        let mut catalog = Self::new(pointer_size);
        // COW std::string/std::wstring are a single data pointer wide
        catalog.add_class("std::string", pointer_size);
        catalog.add_class("std::wstring", pointer_size);
        catalog.add_class("boost::gregorian::date", 4);
        catalog.add_class("boost::posix_time::ptime", 8);
        catalog.add_class("boost::posix_time::time_duration", 8);
        catalog
    }

    pub fn pointer_size(&self) -> usize {
        self.pointer_size
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn insert(&mut self, desc: TypeDescriptor) -> Arc<TypeDescriptor> {
        let arc = Arc::new(desc);
        self.types.insert(arc.name().to_string(), arc.clone());
        arc
    }

    /// Registers a class type by its full spelling. Template arguments are
    /// parsed out of the name and resolved recursively.
    pub fn add_class(&mut self, name: &str, byte_size: usize) -> Arc<TypeDescriptor> {
        self.add_with_kind(name, byte_size, TypeKind::Class, None)
    }

    pub fn add_with_kind(
        &mut self,
        name: &str,
        byte_size: usize,
        kind: TypeKind,
        alignment: Option<usize>,
    ) -> Arc<TypeDescriptor> {
        let name = normalize_name(name);
        let (generic, raw_args) = split_template(&name);
        let args = raw_args
            .iter()
            .map(|a| match parse_integral(a) {
                Some(n) => TemplateArg::Integral(n),
                None => TemplateArg::Type(self.resolve(a)),
            })
            .collect();
        let mut desc = TypeDescriptor::new(&name, &generic, byte_size, kind).with_template_args(args);
        if let Some(a) = alignment {
            desc = desc.with_alignment(a);
        }
        self.insert(desc)
    }

    /// Registers `name` described by another spelling; both names map to
    /// the same descriptor.
    pub fn add_alias(&mut self, name: &str, definition: &str, byte_size: usize) -> Arc<TypeDescriptor> {
        let desc = self.add_class(definition, byte_size);
        self.types.insert(normalize_name(name), desc.clone());
        desc
    }

    /// Looks up a type by spelling, synthesizing primitives, pointers and
    /// unsized placeholders for names the catalog has not seen.
    pub fn resolve(&self, name: &str) -> Arc<TypeDescriptor> {
        let name = normalize_name(name);
        if let Some(d) = self.types.get(&name) {
            return d.clone();
        }
        self.synthesize(&name)
    }

    /// Like `resolve`, but only returns registered entries.
    pub fn lookup(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(&normalize_name(name)).cloned()
    }

    fn synthesize(&self, name: &str) -> Arc<TypeDescriptor> {
        if let Some(p) = PrimitiveType::from_cpp_name(name.trim_start_matches("const "), self.pointer_size) {
            return Arc::new(TypeDescriptor::primitive(name, p));
        }
        if let Some(base) = name.strip_suffix('*').or_else(|| name.strip_suffix('&')) {
            let pointee = self.resolve(base.trim_end());
            return Arc::new(TypeDescriptor::pointer(name, self.pointer_size, Some(pointee)));
        }
        let (generic, raw_args) = split_template(name);
        let args = raw_args
            .iter()
            .map(|a| match parse_integral(a) {
                Some(n) => TemplateArg::Integral(n),
                None => TemplateArg::Type(self.resolve(a)),
            })
            .collect();
        log::debug!("Synthesizing unsized placeholder for type '{}'", name);
        Arc::new(TypeDescriptor::new(name, &generic, 0, TypeKind::Unknown).with_template_args(args))
    }

    /// Builds a `std::pair<F, S>` descriptor with the layout the two
    /// member types dictate. Not registered; shared descriptors come from
    /// repeated template-arg resolution instead.
    pub fn synth_pair(first: &Arc<TypeDescriptor>, second: &Arc<TypeDescriptor>) -> Arc<TypeDescriptor> {
        let align = first.alignment().max(second.alignment()).max(1);
        let second_off = (first.byte_size() + second.alignment() - 1) / second.alignment()
            * second.alignment();
        let size = (second_off + second.byte_size() + align - 1) / align * align;
        let name = format!("std::pair<{}, {}>", first.name(), second.name());
        Arc::new(
            TypeDescriptor::new(&name, "std::pair", size, TypeKind::Class)
                .with_alignment(align)
                .with_template_args(vec![
                    TemplateArg::Type(first.clone()),
                    TemplateArg::Type(second.clone()),
                ]),
        )
    }

    /// Byte offset of a pair's second member.
    pub fn pair_second_offset(first: &Arc<TypeDescriptor>, second: &Arc<TypeDescriptor>) -> usize {
        (first.byte_size() + second.alignment() - 1) / second.alignment() * second.alignment()
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        if file.pointer_size != 4 && file.pointer_size != 8 {
            return Err(CatalogError::BadPointerSize(file.pointer_size));
        }
        let mut catalog = Self::with_defaults(file.pointer_size);
        for entry in file.types {
            if entry.size == 0 {
                return Err(CatalogError::ZeroSize(entry.name));
            }
            let kind = match entry.kind.as_deref() {
                None | Some("class") | Some("struct") => TypeKind::Class,
                Some("enum") => TypeKind::Enum,
                Some(other) => {
                    return Err(CatalogError::UnknownKind {
                        name: entry.name,
                        kind: other.to_string(),
                    })
                }
            };
            match entry.definition {
                Some(def) => {
                    catalog.add_alias(&entry.name, &def, entry.size);
                }
                None => {
                    catalog.add_with_kind(&entry.name, entry.size, kind, entry.align);
                }
            }
        }
        log::info!("Loaded type catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_primitive() {
        let catalog = TypeCatalog::new(8);
        let d = catalog.resolve("unsigned int");
        assert_eq!(d.byte_size(), 4);
        assert!(d.is_primitive());
    }

    #[test]
    fn test_resolve_pointer() {
        let catalog = TypeCatalog::new(8);
        let d = catalog.resolve("int*");
        assert!(d.is_pointer());
        assert_eq!(d.byte_size(), 8);
        assert_eq!(d.pointee().unwrap().name(), "int");
    }

    #[test]
    fn test_add_class_parses_template_args() {
        let mut catalog = TypeCatalog::new(8);
        let d = catalog.add_class("boost::variant<int, double>", 16);
        assert_eq!(d.generic_name(), "boost::variant");
        assert_eq!(d.type_arg_count(), 2);
        assert_eq!(d.type_arg(1).unwrap().byte_size(), 8);
    }

    #[test]
    fn test_alias_shares_descriptor() {
        let mut catalog = TypeCatalog::new(8);
        catalog.add_alias(
            "boost::unordered::unordered_set<int>::iterator",
            "boost::unordered::iterator_detail::iterator<boost::unordered::detail::ptr_node<int>*>",
            8,
        );
        let d = catalog
            .lookup("boost::unordered::unordered_set<int>::iterator")
            .unwrap();
        assert_eq!(d.template_arity(), 1);
    }

    #[test]
    fn test_synth_pair_layout() {
        let catalog = TypeCatalog::new(8);
        let k = catalog.resolve("int");
        let v = catalog.resolve("double");
        let pair = TypeCatalog::synth_pair(&k, &v);
        assert_eq!(TypeCatalog::pair_second_offset(&k, &v), 8);
        assert_eq!(pair.byte_size(), 16);
        assert_eq!(pair.alignment(), 8);
    }

    #[test]
    fn test_from_json() {
        let text = r#"{
            "pointer_size": 8,
            "types": [
                {"name": "boost::optional<int>", "size": 8},
                {"name": "Color", "size": 4, "kind": "enum"}
            ]
        }"#;
        let catalog = TypeCatalog::from_json(text).unwrap();
        let d = catalog.lookup("boost::optional<int>").unwrap();
        assert_eq!(d.byte_size(), 8);
        assert_eq!(d.type_arg(0).unwrap().name(), "int");
        assert!(matches!(catalog.lookup("Color").unwrap().kind(), TypeKind::Enum));
    }

    #[test]
    fn test_from_json_rejects_zero_size() {
        let text = r#"{"types": [{"name": "X", "size": 0}]}"#;
        assert!(matches!(
            TypeCatalog::from_json(text),
            Err(CatalogError::ZeroSize(_))
        ));
    }
}
