//! Render contexts: everything a template needs for one package variant.

use serde::Serialize;

use crate::error::{FatexError, Result};
use crate::types::{Family, IconDescriptor, PackageVariant, Style};

/// Package-level build parameters shared by every variant of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// LaTeX package base name (e.g. "fontawesome5").
    pub package_name: String,
    /// Build date, `YYYY/MM/DD`.
    pub date: String,
    /// Font release version (e.g. "5.15.4").
    pub version: String,
    /// Font container label (e.g. "OpenType").
    pub font_type: String,
}

impl BuildInfo {
    pub fn new(
        package_name: impl Into<String>,
        date: impl Into<String>,
        version: impl Into<String>,
        font_type: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            date: date.into(),
            version: version.into(),
            font_type: font_type.into(),
        }
    }

    /// Today's local date in LaTeX `\ProvidesPackage` form.
    pub fn today() -> String {
        chrono::Local::now().format("%Y/%m/%d").to_string()
    }
}

/// Input consumed by the template renderer for one package variant.
#[derive(Debug, Clone, Serialize)]
pub struct PackageRenderContext {
    pub package_name: String,
    /// "brands" or "<family>-<style>".
    pub variant_id: String,
    /// Not set for cross-family variants.
    pub family: Option<Family>,
    pub style_key: Style,
    pub description: String,
    pub build_date: String,
    pub font_version: String,
    pub font_type: String,
    pub font_family_name: String,
    pub name_prefix: String,
    pub name_suffix: String,
    /// Icons sorted by internal name.
    pub icons: Vec<IconDescriptor>,
}

impl PackageRenderContext {
    /// File name of the style definitions artifact.
    pub fn style_file_name(&self) -> String {
        format!("{}-{}.sty", self.package_name, self.variant_id)
    }

    /// File name of the macro definitions artifact.
    pub fn macros_file_name(&self) -> String {
        format!("{}-{}-macros.def", self.package_name, self.variant_id)
    }
}

/// Build the render context for `variant`.
///
/// `descriptors` is expected in corpus order; the context holds them sorted
/// by internal name. A blank version is rejected.
pub fn build_context(
    style: Style,
    descriptors: &[IconDescriptor],
    variant: &PackageVariant,
    info: &BuildInfo,
) -> Result<PackageRenderContext> {
    let version = info.version.trim();
    if version.is_empty() {
        return Err(FatexError::MissingVersion {
            variant: variant.id(),
        });
    }

    let mut icons = descriptors.to_vec();
    icons.sort_by(|a, b| a.internal_name.cmp(&b.internal_name));

    let description = format!(
        "{} v{} {} ({})",
        info.date, version, variant.display_name, info.font_type
    );

    Ok(PackageRenderContext {
        package_name: info.package_name.clone(),
        variant_id: variant.id(),
        family: (!style.is_cross_family()).then_some(variant.family),
        style_key: style,
        description,
        build_date: info.date.clone(),
        font_version: version.to_string(),
        font_type: info.font_type.clone(),
        font_family_name: variant.font_family_name.clone(),
        name_prefix: variant.name_prefix.clone(),
        name_suffix: variant.name_suffix.clone(),
        icons,
    })
}
