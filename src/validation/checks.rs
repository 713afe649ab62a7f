//! Validation checks for an assembled corpus.
//!
//! Fatal problems (collisions, missing variants) already stop assembly;
//! these checks report what assembles but will likely surprise a user.

use std::collections::HashMap;

use crate::assemble::Assembly;
use crate::output::plural;
use crate::types::Catalog;

use super::warning::{Diagnostic, ValidationResult};

/// Macro names should be plain ASCII letters and digits.
pub fn check_identifier_charset(assembly: &Assembly) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (style, icons) in assembly.iter() {
        for icon in icons {
            if !icon.macro_name.chars().all(|c| c.is_ascii_alphanumeric()) {
                result.push(
                    Diagnostic::warning(
                        "fatex::validate::identifier-charset",
                        format!(
                            "{} icon '{}': macro name '{}' contains characters other than ASCII letters and digits",
                            style, icon.internal_name, icon.macro_name
                        ),
                    )
                    .with_help("Add a full-label override for this label"),
                );
            }
        }
    }

    result
}

/// Internal names should start with a letter.
pub fn check_internal_names(assembly: &Assembly) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (style, icons) in assembly.iter() {
        for icon in icons {
            let starts_with_letter = icon
                .internal_name
                .chars()
                .next()
                .map(|c| c.is_ascii_alphabetic())
                .unwrap_or(false);
            if !starts_with_letter {
                result.push(
                    Diagnostic::warning(
                        "fatex::validate::internal-name",
                        format!(
                            "{} icon '{}' does not start with a letter",
                            style, icon.internal_name
                        ),
                    )
                    .with_help("Add an internal-name override for this slug"),
                );
            }
        }
    }

    result
}

/// Two icons of one style pointing at the same glyph.
pub fn check_duplicate_codepoints(assembly: &Assembly) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (style, icons) in assembly.iter() {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for icon in icons {
            if let Some(first) = seen.insert(&icon.codepoint_upper, &icon.internal_name) {
                result.push(Diagnostic::warning(
                    "fatex::validate::duplicate-codepoint",
                    format!(
                        "{} icons '{}' and '{}' share codepoint {}",
                        style, first, icon.internal_name, icon.codepoint_upper
                    ),
                ));
            }
        }
    }

    result
}

/// Styles that were dropped during assembly.
pub fn check_skipped_styles(assembly: &Assembly) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (style, count) in assembly.skipped().by_style() {
        result.push(
            Diagnostic::warning(
                "fatex::validate::skipped-style",
                format!(
                    "{} with style '{}' not packaged for the {} family",
                    plural(count, "icon", "icons"),
                    style,
                    assembly.family
                ),
            )
            .with_help("Expected for pro-only styles in a free build"),
        );
    }

    result
}

/// Variants of the family that received no icons.
pub fn check_empty_variants(assembly: &Assembly, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for variant in catalog.for_family(assembly.family) {
        if assembly.icons(variant.style).is_empty() {
            result.push(Diagnostic::warning(
                "fatex::validate::empty-variant",
                format!("Package variant '{}' has no icons", variant.id()),
            ));
        }
    }

    result
}
