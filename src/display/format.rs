// Thu Feb 05 2026 - Alex

use bitflags::bitflags;

bitflags! {
    /// Alternative display formats a front end may offer for a type, the
    /// companion query to a decoder's normal output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatHints: u32 {
        const ARRAY_PLOT      = 1 << 0;
        const COMPACT_MAP     = 1 << 1;
        const RAW_HEX         = 1 << 2;
        const SEPARATE_WINDOW = 1 << 3;
        const UTF8_STRING     = 1 << 4;
    }
}

impl FormatHints {
    pub fn labels(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(FormatHints::ARRAY_PLOT) {
            out.push("array plot");
        }
        if self.contains(FormatHints::COMPACT_MAP) {
            out.push("compact map");
        }
        if self.contains(FormatHints::RAW_HEX) {
            out.push("raw hex");
        }
        if self.contains(FormatHints::SEPARATE_WINDOW) {
            out.push("separate window");
        }
        if self.contains(FormatHints::UTF8_STRING) {
            out.push("utf-8 string");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let hints = FormatHints::ARRAY_PLOT | FormatHints::RAW_HEX;
        assert_eq!(hints.labels(), vec!["array plot", "raw hex"]);
        assert!(FormatHints::empty().labels().is_empty());
    }
}
