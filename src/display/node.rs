// Thu Feb 05 2026 - Alex

use serde::Serialize;
use std::fmt;

/// Sentinel display states that replace a normal value string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentinel {
    Null,
    Uninitialized,
    Invalid,
    NotADate,
    PosInfinity,
    NegInfinity,
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentinel::Null => "(null)",
            Sentinel::Uninitialized => "<uninitialized>",
            Sentinel::Invalid => "(invalid)",
            Sentinel::NotADate => "(not a date)",
            Sentinel::PosInfinity => "(+infinity)",
            Sentinel::NegInfinity => "(-infinity)",
        };
        write!(f, "{}", s)
    }
}

/// One node of a decoded display tree.
///
/// `child_count` is the count a decoder *stated* (item counts for
/// containers, an explicit zero after a sentinel); `None` leaves the host
/// to infer it from `children`. The two are distinct on purpose: the
/// legacy host profile never states counts for sentinel nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNode {
    pub name: String,
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<Sentinel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplayNode>,
    pub address: u64,
}

impl DisplayNode {
    pub fn new(name: &str, type_name: &str, address: u64) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            value: None,
            sentinel: None,
            child_count: None,
            children: Vec::new(),
            address,
        }
    }

    /// The one-line display string: the sentinel when set, else the value.
    pub fn display_value(&self) -> String {
        match (&self.sentinel, &self.value) {
            (Some(s), _) => s.to_string(),
            (None, Some(v)) => v.clone(),
            (None, None) => String::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.sentinel.is_some()
    }

    /// Total node count of the subtree, the root included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(DisplayNode::subtree_size).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_prefers_sentinel() {
        let mut n = DisplayNode::new("x", "int*", 0x10);
        n.value = Some("0x20".to_string());
        n.sentinel = Some(Sentinel::Null);
        assert_eq!(n.display_value(), "(null)");
    }

    #[test]
    fn test_subtree_size() {
        let mut root = DisplayNode::new("root", "T", 0);
        root.children.push(DisplayNode::new("a", "int", 0));
        let mut b = DisplayNode::new("b", "U", 0);
        b.children.push(DisplayNode::new("c", "int", 0));
        root.children.push(b);
        assert_eq!(root.subtree_size(), 4);
    }
}
