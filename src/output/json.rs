// Fri Feb 13 2026 - Alex

use crate::display::DisplayNode;
use serde_json::{json, Value};
use std::io::Write;

/// JSON serialization of display trees for tooling consumers.
pub struct JsonSerializer {
    pretty_print: bool,
    include_metadata: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_metadata: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    pub fn to_value(&self, node: &DisplayNode) -> Value {
        let tree = serde_json::to_value(node).unwrap_or(Value::Null);
        if self.include_metadata {
            json!({
                "generator": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "node_count": node.subtree_size(),
                "tree": tree,
            })
        } else {
            tree
        }
    }

    pub fn to_string(&self, node: &DisplayNode) -> serde_json::Result<String> {
        let value = self.to_value(node);
        if self.pretty_print {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
    }

    pub fn write<W: Write>(&self, node: &DisplayNode, mut writer: W) -> std::io::Result<()> {
        let text = self
            .to_string(node)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
