// Fri Feb 13 2026 - Alex

use crate::display::DisplayNode;
use colored::Colorize;

/// Indented plain-text rendering of a display tree.
pub struct TextRenderer {
    use_color: bool,
    show_types: bool,
    show_addresses: bool,
    indent: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            use_color: false,
            show_types: true,
            show_addresses: false,
            indent: 2,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_types(mut self, show_types: bool) -> Self {
        self.show_types = show_types;
        self
    }

    pub fn with_addresses(mut self, show_addresses: bool) -> Self {
        self.show_addresses = show_addresses;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn render(&self, node: &DisplayNode) -> String {
        let mut out = String::new();
        self.render_node(node, 0, &mut out);
        out
    }

    fn render_node(&self, node: &DisplayNode, depth: usize, out: &mut String) {
        out.push_str(&" ".repeat(depth * self.indent));

        let name = if self.use_color {
            node.name.cyan().to_string()
        } else {
            node.name.clone()
        };
        out.push_str(&name);

        let value = node.display_value();
        if !value.is_empty() {
            let value = if self.use_color && node.is_sentinel() {
                value.yellow().to_string()
            } else {
                value
            };
            out.push_str(" = ");
            out.push_str(&value);
        }

        if self.show_types {
            let ty = format!("[{}]", node.type_name);
            let ty = if self.use_color {
                ty.dimmed().to_string()
            } else {
                ty
            };
            out.push(' ');
            out.push_str(&ty);
        }

        if self.show_addresses {
            out.push_str(&format!(" @ 0x{:x}", node.address));
        }

        if let Some(count) = node.child_count {
            if node.children.is_empty() && count > 0 {
                out.push_str(&format!(" (+{} collapsed)", count));
            }
        }
        out.push('\n');

        for child in &node.children {
            self.render_node(child, depth + 1, out);
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
