//! Display casing for canonical keys in responses.
//!
//! The catalog stores keys lowercase; the two HTTP services case them
//! differently on the way out, so both spellings live here.

/// Uppercase the first character and lowercase the rest.
///
/// This is the fuzzy service's casing: multi-word keys keep later words
/// lowercase, so "south africa" becomes "South africa".
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every whitespace-separated word.
///
/// The booking service's casing: "south africa" becomes "South Africa".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
