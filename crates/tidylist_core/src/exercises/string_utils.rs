//! String helpers.

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reverses `value` by Unicode scalar value.
pub fn reverse_string(value: &str) -> String {
    value.chars().rev().collect()
}
