//! Icon descriptors: one record rendered for one package variant.

use serde::Serialize;

use crate::normalize::{normalize, overrides};

use super::record::IconRecord;
use super::style::Style;
use super::variant::PackageVariant;

/// A record prepared for one style. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconDescriptor {
    /// Slug, or its internal-name override.
    pub internal_name: String,
    /// Normalized label token.
    pub normalized_label: String,
    /// Uppercase hex codepoint.
    pub codepoint_upper: String,
    pub prefix: String,
    pub suffix: String,
    /// Empty when the variant has no decoration.
    pub modifier: String,
    pub style_key: Style,
    /// `prefix + normalized_label + suffix`.
    pub macro_name: String,
}

impl IconDescriptor {
    /// Build the descriptor for `record` in `variant`'s style.
    pub fn build(record: &IconRecord, style: Style, variant: &PackageVariant) -> Self {
        let internal_name = overrides::internal_name(&record.slug)
            .map(str::to_string)
            .unwrap_or_else(|| record.slug.clone());
        let normalized_label = normalize(&record.label);
        let macro_name = format!(
            "{}{}{}",
            variant.name_prefix, normalized_label, variant.name_suffix
        );

        Self {
            internal_name,
            normalized_label,
            codepoint_upper: record.codepoint.to_uppercase(),
            prefix: variant.name_prefix.clone(),
            suffix: variant.name_suffix.clone(),
            modifier: variant.modifier.clone().unwrap_or_default(),
            style_key: style,
            macro_name,
        }
    }
}
