// Tue Feb 03 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static ELABORATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(class|struct|enum)\s+").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a C++ type spelling into the canonical form used as catalog
/// and registry keys: elaboration keywords dropped, whitespace collapsed,
/// no space after `<` or `,`, `> >` folded to `>>`.
pub fn normalize_name(raw: &str) -> String {
    let s = ELABORATION_RE.replace_all(raw.trim(), "");
    let s = SPACE_RE.replace_all(&s, " ");
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' | ',' => {
                out.push(c);
                if c == ',' {
                    out.push(' ');
                }
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            ' ' => {
                match chars.peek() {
                    // "> >" and " >" collapse, " *" and " &" attach
                    Some('>') | Some('*') | Some('&') | Some(',') => {}
                    _ => out.push(' '),
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Splits `ns::name<a, b<c, d>>` into the generic name and the raw
/// argument spellings. Non-template names come back with no arguments.
pub fn split_template(name: &str) -> (String, Vec<String>) {
    let open = match name.find('<') {
        Some(i) => i,
        None => return (name.to_string(), Vec::new()),
    };
    if !name.ends_with('>') {
        return (name.to_string(), Vec::new());
    }
    let generic = name[..open].to_string();
    let body = &name[open + 1..name.len() - 1];

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(body[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = body[start..].trim();
    if !last.is_empty() {
        args.push(last.to_string());
    }
    (generic, args)
}

/// Template arguments that are integral constants rather than types.
pub fn parse_integral(arg: &str) -> Option<i64> {
    let arg = arg.trim();
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }
    arg.parse::<i64>().ok()
}
