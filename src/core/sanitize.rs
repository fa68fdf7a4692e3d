// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Clean a short listing field ("  Acme&nbsp;Corp \n") → "Acme Corp".
/// Empty results count as missing.
pub fn clean_field(s: &str) -> Option<String> {
    let out = normalize_ws(&normalize_entities(s));
    if out.is_empty() { None } else { Some(out) }
}

/// Parse a human count like "1,234" or "12.500" → 1234 / 12500.
/// Separators between digit groups are ignored; stops at the first other char.
pub fn parse_count(s: &str) -> Option<u64> {
    let mut digits = s!();
    for ch in s.trim_start().chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if matches!(ch, ',' | '.' | '\u{a0}') && !digits.is_empty() {
            continue;
        } else {
            break;
        }
    }
    digits.parse().ok()
}
