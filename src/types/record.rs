//! Icon metadata records.

/// One glyph from the metadata corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Unique corpus key (e.g. "arrow-up").
    pub slug: String,
    /// Human-readable label (e.g. "Arrow Up").
    pub label: String,
    /// Hex codepoint as found in the metadata, without `U+`.
    pub codepoint: String,
    /// Style tags as found in the metadata. Unknown tags are kept so the
    /// assembler can count them.
    pub styles: Vec<String>,
}

impl IconRecord {
    /// Create a new record.
    pub fn new(
        slug: impl Into<String>,
        label: impl Into<String>,
        codepoint: impl Into<String>,
        styles: &[&str],
    ) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
            codepoint: codepoint.into(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check a codepoint string: 1 to 6 hex digits within the Unicode range.
    pub fn is_valid_codepoint(codepoint: &str) -> bool {
        if codepoint.is_empty() || codepoint.len() > 6 {
            return false;
        }
        match u32::from_str_radix(codepoint, 16) {
            Ok(value) => value <= 0x10FFFF && codepoint.chars().all(|c| c.is_ascii_hexdigit()),
            Err(_) => false,
        }
    }
}
