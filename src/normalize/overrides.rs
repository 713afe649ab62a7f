//! Exact-match override tables.
//!
//! Both tables bypass the algorithmic path for inputs it cannot express:
//! slugs that are not valid macro-namespace names, and labels carrying brand
//! spellings, embedded punctuation or non-ASCII letters.

/// Slug -> internal name.
pub const INTERNAL_NAMES: &[(&str, &str)] = &[("500px", "fivehundredpx")];

/// Full label -> final identifier.
pub const FULL_LABELS: &[(&str, &str)] = &[
    ("Sort Down (Descending)", "SortDown"),
    ("Sort Up (Ascending)", "SortUp"),
    ("Creative Commons Noncommercial (Euro Sign)", "CreativeCommonsNcEu"),
    ("Creative Commons Noncommercial (Yen Sign)", "CreativeCommonsNcJp"),
    ("Dungeons & Dragons", "DAndD"),
    ("Font Awesome Full Logo", "FontAwesomeLogoFull"),
    ("Pokémon Ball", "PokemonBall"),
    ("Café", "Cafe"),
];

/// Look up a forced internal name for `slug`.
pub fn internal_name(slug: &str) -> Option<&'static str> {
    lookup(INTERNAL_NAMES, slug)
}

/// Look up a forced identifier for `label`.
pub fn full_label(label: &str) -> Option<&'static str> {
    lookup(FULL_LABELS, label)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
