//! Package assembly.
//!
//! Walks the corpus in slug order and sorts each (record, style) pair into
//! the package variant that serves it. The result keeps one ordered list of
//! descriptors per style.
//!
//! # Example
//!
//! ```ignore
//! use fatex::assemble::assemble;
//! use fatex::types::{Catalog, Family};
//!
//! let assembly = assemble(&records, Family::Free, &Catalog::builtin())?;
//! for (style, icons) in assembly.iter() {
//!     println!("{}: {} icons", style, icons.len());
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{FatexError, Result};
use crate::types::{Catalog, Family, IconDescriptor, IconRecord, Style};

/// A (slug, style) pair that was not packaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStyle {
    pub slug: String,
    pub style: String,
}

/// Styles dropped during assembly, either unknown tags or styles
/// outside the selected family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipReport {
    entries: Vec<SkippedStyle>,
}

impl SkipReport {
    fn push(&mut self, slug: &str, style: &str) {
        self.entries.push(SkippedStyle {
            slug: slug.to_string(),
            style: style.to_string(),
        });
    }

    /// Number of skipped (slug, style) pairs.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skip counts grouped by style tag.
    pub fn by_style(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.style.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkippedStyle> {
        self.entries.iter()
    }
}

/// Result of assembling a corpus for one family.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub family: Family,
    packages: BTreeMap<Style, Vec<IconDescriptor>>,
    skipped: SkipReport,
}

impl Assembly {
    /// Descriptors for `style`, in corpus order.
    pub fn icons(&self, style: Style) -> &[IconDescriptor] {
        self.packages.get(&style).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Styles that received at least one icon.
    pub fn styles(&self) -> impl Iterator<Item = Style> + '_ {
        self.packages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Style, &[IconDescriptor])> {
        self.packages.iter().map(|(s, icons)| (*s, icons.as_slice()))
    }

    /// Total descriptors across all styles.
    pub fn total(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    pub fn skipped(&self) -> &SkipReport {
        &self.skipped
    }
}

/// Assemble `records` into per-style descriptor lists for `family`.
///
/// Fails with `MissingVariant` before building anything if a style used by
/// the corpus has no variant in `catalog`, and with `NameCollision` when two
/// icons of the same style produce the same macro name.
pub fn assemble(records: &[IconRecord], family: Family, catalog: &Catalog) -> Result<Assembly> {
    let mut sorted: Vec<&IconRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.slug.cmp(&b.slug));

    check_variants(&sorted, family, catalog)?;

    let mut packages: BTreeMap<Style, Vec<IconDescriptor>> = BTreeMap::new();
    let mut used: HashMap<Style, HashMap<String, String>> = HashMap::new();
    let mut skipped = SkipReport::default();

    for record in sorted {
        for tag in &record.styles {
            let style = match Style::from_key(tag) {
                Some(style) if family.supports(style) => style,
                _ => {
                    skipped.push(&record.slug, tag);
                    continue;
                }
            };

            let variant = catalog
                .get(family, style)
                .ok_or_else(|| missing_variant(family, style))?;
            let icon = IconDescriptor::build(record, style, variant);

            let names = used.entry(style).or_default();
            if let Some(first) = names.get(&icon.macro_name) {
                return Err(FatexError::NameCollision {
                    style: style.to_string(),
                    name: icon.macro_name.clone(),
                    first: first.clone(),
                    second: record.slug.clone(),
                });
            }
            names.insert(icon.macro_name.clone(), record.slug.clone());

            packages.entry(style).or_default().push(icon);
        }
    }

    Ok(Assembly {
        family,
        packages,
        skipped,
    })
}

/// Every packaged style present in the corpus needs a catalog variant.
fn check_variants(records: &[&IconRecord], family: Family, catalog: &Catalog) -> Result<()> {
    let present: BTreeSet<Style> = records
        .iter()
        .flat_map(|r| r.styles.iter())
        .filter_map(|tag| Style::from_key(tag))
        .filter(|style| family.supports(*style))
        .collect();

    for style in present {
        if catalog.get(family, style).is_none() {
            return Err(missing_variant(family, style));
        }
    }
    Ok(())
}

fn missing_variant(family: Family, style: Style) -> FatexError {
    FatexError::MissingVariant {
        family: family.to_string(),
        style: style.to_string(),
    }
}
