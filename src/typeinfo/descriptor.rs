// Tue Feb 03 2026 - Alex

use crate::typeinfo::PrimitiveType;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Primitive(PrimitiveType),
    Pointer,
    Class,
    Enum,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateArg {
    Type(Arc<TypeDescriptor>),
    Integral(i64),
}

/// Static type metadata attached to a raw value: normalized name, byte
/// size, alignment, kind and template arguments. This is the half of a
/// value handle a debugger backend would supply from debug info.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    generic: String,
    byte_size: usize,
    alignment: usize,
    kind: TypeKind,
    template_args: Vec<TemplateArg>,
    pointee: Option<Arc<TypeDescriptor>>,
}

fn default_alignment(byte_size: usize) -> usize {
    match byte_size {
        0 => 1,
        n => n.next_power_of_two().min(8),
    }
}

impl TypeDescriptor {
    pub fn new(name: &str, generic: &str, byte_size: usize, kind: TypeKind) -> Self {
        Self {
            name: name.to_string(),
            generic: generic.to_string(),
            byte_size,
            alignment: default_alignment(byte_size),
            kind,
            template_args: Vec::new(),
            pointee: None,
        }
    }

    pub fn primitive(name: &str, p: PrimitiveType) -> Self {
        Self {
            name: name.to_string(),
            generic: name.to_string(),
            byte_size: p.size(),
            alignment: p.alignment(),
            kind: TypeKind::Primitive(p),
            template_args: Vec::new(),
            pointee: None,
        }
    }

    pub fn pointer(name: &str, pointer_size: usize, pointee: Option<Arc<TypeDescriptor>>) -> Self {
        Self {
            name: name.to_string(),
            generic: name.to_string(),
            byte_size: pointer_size,
            alignment: pointer_size,
            kind: TypeKind::Pointer,
            template_args: Vec::new(),
            pointee,
        }
    }

    pub fn with_alignment(mut self, alignment: usize) -> Self {
        assert!(alignment.is_power_of_two());
        self.alignment = alignment;
        self
    }

    pub fn with_template_args(mut self, args: Vec<TemplateArg>) -> Self {
        self.template_args = args;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the template-argument list stripped, the registry key.
    pub fn generic_name(&self) -> &str {
        &self.generic
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.kind, TypeKind::Pointer)
    }

    pub fn pointee(&self) -> Option<&Arc<TypeDescriptor>> {
        self.pointee.as_ref()
    }

    pub fn template_args(&self) -> &[TemplateArg] {
        &self.template_args
    }

    pub fn template_arity(&self) -> usize {
        self.template_args.len()
    }

    pub fn template_arg(&self, index: usize) -> Option<&TemplateArg> {
        self.template_args.get(index)
    }

    /// The index-th template argument that is a type (integral arguments
    /// are skipped by the count).
    pub fn type_arg(&self, index: usize) -> Option<&Arc<TypeDescriptor>> {
        self.template_args
            .iter()
            .filter_map(|a| match a {
                TemplateArg::Type(t) => Some(t),
                TemplateArg::Integral(_) => None,
            })
            .nth(index)
    }

    pub fn type_arg_count(&self) -> usize {
        self.template_args
            .iter()
            .filter(|a| matches!(a, TemplateArg::Type(_)))
            .count()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
