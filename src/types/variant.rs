//! Package variants and the package catalog.
//!
//! A package variant is one concrete output package: a family and style pair
//! backed by one font face, with its own macro-name decoration.
//!
//! # Example
//!
//! ```yaml
//! variants:
//!   - family: free
//!     style: solid
//!     suffix: Solid
//!     modifier: \bfseries
//! ```

use serde::{Deserialize, Serialize};

use super::style::{Family, Style};

/// Static description of one package variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVariant {
    /// Family this variant belongs to. Ignored for brands.
    pub family: Family,
    /// Style packaged by this variant.
    pub style: Style,
    /// Human name used in package descriptions.
    pub display_name: String,
    /// Full name of the font face.
    pub font_family_name: String,
    /// Prepended to the normalized label.
    pub name_prefix: String,
    /// Appended to the normalized label.
    pub name_suffix: String,
    /// Typesetting switch applied around the glyph (e.g. `\bfseries`).
    pub modifier: Option<String>,
}

impl PackageVariant {
    /// Create a variant with Font Awesome 5 naming and no decoration.
    pub fn new(family: Family, style: Style) -> Self {
        let display_name = if style.is_cross_family() {
            format!("Font Awesome 5 {}", style.title())
        } else {
            format!("Font Awesome 5 {} {}", family.title(), style.title())
        };
        let font_family_name = if style.is_cross_family() {
            "Font Awesome 5 Brands Regular".to_string()
        } else {
            display_name.clone()
        };

        Self {
            family,
            style,
            display_name,
            font_family_name,
            name_prefix: "fa".to_string(),
            name_suffix: String::new(),
            modifier: None,
        }
    }

    /// Stable identifier used in file names: "brands" or "<family>-<style>".
    pub fn id(&self) -> String {
        if self.style.is_cross_family() {
            self.style.key().to_string()
        } else {
            format!("{}-{}", self.family.key(), self.style.key())
        }
    }

    /// Whether this variant serves `style` for `family`.
    pub fn serves(&self, family: Family, style: Style) -> bool {
        self.style == style && (style.is_cross_family() || self.family == family)
    }

    fn apply(&mut self, update: &VariantOverride) {
        if let Some(name) = &update.display_name {
            self.display_name = name.clone();
        }
        if let Some(font) = &update.font_family_name {
            self.font_family_name = font.clone();
        }
        if let Some(prefix) = &update.prefix {
            self.name_prefix = prefix.clone();
        }
        if let Some(suffix) = &update.suffix {
            self.name_suffix = suffix.clone();
        }
        if let Some(modifier) = &update.modifier {
            self.modifier = if modifier.is_empty() {
                None
            } else {
                Some(modifier.clone())
            };
        }
    }
}

/// Per-field override of a builtin variant, read from the project manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOverride {
    /// Family of the variant to change. Not needed for brands.
    pub family: Option<Family>,
    pub style: Option<Style>,
    pub display_name: Option<String>,
    pub font_family_name: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// An empty string removes the modifier.
    pub modifier: Option<String>,
}

/// The set of package variants known to a build.
#[derive(Debug, Clone)]
pub struct Catalog {
    variants: Vec<PackageVariant>,
}

impl Catalog {
    /// Create a catalog from explicit variants.
    pub fn new(variants: Vec<PackageVariant>) -> Self {
        Self { variants }
    }

    /// The builtin Font Awesome 5 catalog.
    ///
    /// Solid and light variants get a style suffix so their macros do not
    /// collide with the regular ones when several packages are loaded together.
    pub fn builtin() -> Self {
        let mut variants = Vec::new();

        for family in [Family::Free, Family::Pro] {
            variants.push(PackageVariant::new(family, Style::Regular));

            let mut solid = PackageVariant::new(family, Style::Solid);
            solid.name_suffix = "Solid".to_string();
            solid.modifier = Some("\\bfseries".to_string());
            variants.push(solid);
        }

        let mut light = PackageVariant::new(Family::Pro, Style::Light);
        light.name_suffix = "Light".to_string();
        light.modifier = Some("\\mdseries\\itshape".to_string());
        variants.push(light);

        variants.push(PackageVariant::new(Family::Free, Style::Brands));

        Self { variants }
    }

    /// Apply manifest overrides. An override that matches no variant is an error.
    pub fn with_overrides(mut self, overrides: &[VariantOverride]) -> Result<Self, String> {
        for update in overrides {
            let style = update
                .style
                .ok_or_else(|| "Variant override is missing `style`".to_string())?;
            let family = match (update.family, style.is_cross_family()) {
                (Some(family), _) => family,
                (None, true) => Family::Free,
                (None, false) => {
                    return Err(format!(
                        "Variant override for style '{}' is missing `family`",
                        style
                    ))
                }
            };

            let variant = self
                .variants
                .iter_mut()
                .find(|v| v.serves(family, style))
                .ok_or_else(|| format!("No {} {} variant to override", family, style))?;
            variant.apply(update);
        }
        Ok(self)
    }

    /// Find the variant serving `style` for `family`.
    pub fn get(&self, family: Family, style: Style) -> Option<&PackageVariant> {
        self.variants.iter().find(|v| v.serves(family, style))
    }

    /// Variants packaged for `family`, brands last.
    pub fn for_family(&self, family: Family) -> Vec<&PackageVariant> {
        Style::ALL
            .iter()
            .filter(|style| family.supports(**style))
            .filter_map(|style| self.get(family, *style))
            .collect()
    }

    /// Iterate over all variants.
    pub fn iter(&self) -> impl Iterator<Item = &PackageVariant> {
        self.variants.iter()
    }
}
