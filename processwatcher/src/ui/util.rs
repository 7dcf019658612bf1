//! Small formatting helpers: units, truncation, digit grouping.

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

pub fn gib(b: u64) -> f64 {
    b as f64 / GIB
}

pub fn mib(b: u64) -> f64 {
    b as f64 / MIB
}

/// First `max` characters of `s` (char-aware, never splits a code point).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}
