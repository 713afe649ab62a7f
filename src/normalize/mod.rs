//! Label normalization.
//!
//! Turns a human label such as "Arrow Alt Circle Up" or "1/2" into a
//! PascalCase token that can be used inside a macro name:
//!
//! 1. an exact full-label override wins outright
//! 2. the substitution passes rewrite fractions, punctuation, symbols and digits
//! 3. the result is split on spaces and each word gets an uppercase first letter

pub mod overrides;
pub mod passes;

pub use passes::{substitute, SubstitutionPass, PASSES};

/// Normalize a label into an identifier token.
pub fn normalize(label: &str) -> String {
    if let Some(forced) = overrides::full_label(label) {
        return forced.to_string();
    }

    substitute(label).split(' ').map(capitalize).collect()
}

/// Uppercase the first character; the rest is kept as is.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
