//! Template rendering.
//!
//! Each package variant produces two artifacts: a style definitions file
//! (font setup and one glyph per icon) and a macro definitions file (one
//! user-facing macro per icon). Both come from handlebars templates; the
//! builtin ones can be replaced from a template directory.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;

use crate::error::{FatexError, Result};

use super::context::PackageRenderContext;

const STYLE_TEMPLATE: &str = r#"%% {{package_name}}-{{variant_id}}.sty
%% Generated by fatex. Do not edit.
\NeedsTeXFormat{LaTeX2e}
\ProvidesPackage{ {{~package_name~}} - {{~variant_id~}} }[{{description}}]

\RequirePackage{fontspec}

\expandafter\newfontfamily\csname FA@font@{{variant_id}}\endcsname{ {{~font_family_name~}} }

\providecommand*\FA@icon[3]{%
  {\csname FA@font@#1\endcsname#3\csname FA@glyph@#1@#2\endcsname}%
}

{{#each icons}}
\expandafter\def\csname FA@glyph@{{../variant_id}}@{{internal_name}}\endcsname{\char"{{codepoint_upper}}\relax}
{{/each}}

\input{ {{~package_name~}} - {{~variant_id~}} -macros.def}

\endinput
"#;

const MACROS_TEMPLATE: &str = r#"%% {{package_name}}-{{variant_id}}-macros.def
%% {{description}}
{{#each icons}}
\expandafter\DeclareRobustCommand\csname {{macro_name}}\endcsname{\FA@icon{ {{~../variant_id~}} }{ {{~internal_name~}} }{ {{~modifier~}} }\relax}
{{/each}}
\endinput
"#;

/// The artifact kinds rendered for every package variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Style,
    Macros,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Style, TemplateKind::Macros];

    /// Registry name of the template.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Style => "style",
            TemplateKind::Macros => "macros",
        }
    }

    /// File name looked up in a template override directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Style => "style.hbs",
            TemplateKind::Macros => "macros.hbs",
        }
    }

    fn builtin(self) -> &'static str {
        match self {
            TemplateKind::Style => STYLE_TEMPLATE,
            TemplateKind::Macros => MACROS_TEMPLATE,
        }
    }

    /// Output file name for `ctx`.
    pub fn output_name(self, ctx: &PackageRenderContext) -> String {
        match self {
            TemplateKind::Style => ctx.style_file_name(),
            TemplateKind::Macros => ctx.macros_file_name(),
        }
    }
}

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// Handlebars-backed renderer holding one template per artifact kind.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Renderer with the builtin templates.
    pub fn builtin() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        let mut renderer = Self { registry };
        for kind in TemplateKind::ALL {
            renderer.register(kind, kind.builtin())?;
        }
        Ok(renderer)
    }

    /// Renderer with builtin templates replaced by any `style.hbs` or
    /// `macros.hbs` found in `dir`.
    pub fn with_template_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(FatexError::Io {
                path: dir.to_path_buf(),
                message: "Template directory does not exist".to_string(),
            });
        }

        let mut renderer = Self::builtin()?;
        for kind in TemplateKind::ALL {
            let path = dir.join(kind.file_name());
            if !path.exists() {
                continue;
            }
            let source = fs::read_to_string(&path).map_err(|e| FatexError::Io {
                path: path.clone(),
                message: format!("Failed to read template: {}", e),
            })?;
            renderer.register(kind, &source)?;
        }
        Ok(renderer)
    }

    fn register(&mut self, kind: TemplateKind, source: &str) -> Result<()> {
        self.registry
            .register_template_string(kind.name(), source)
            .map_err(|e| FatexError::Parse {
                message: format!("Invalid {} template: {}", kind.name(), e),
                help: Some("Check the handlebars syntax of the template".to_string()),
            })
    }

    /// Render one artifact kind.
    pub fn render(&self, kind: TemplateKind, ctx: &PackageRenderContext) -> Result<String> {
        self.registry
            .render(kind.name(), ctx)
            .map_err(|e| FatexError::Render {
                message: format!("{} for {}: {}", kind.name(), ctx.variant_id, e),
            })
    }

    /// Render every artifact kind for one package variant.
    pub fn render_package(&self, ctx: &PackageRenderContext) -> Result<Vec<Artifact>> {
        TemplateKind::ALL
            .iter()
            .map(|kind| {
                Ok(Artifact {
                    file_name: kind.output_name(ctx),
                    contents: self.render(*kind, ctx)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{build_context, BuildInfo};
    use crate::types::{Catalog, Family, IconDescriptor, IconRecord, Style};
    use tempfile::tempdir;

    fn solid_context() -> PackageRenderContext {
        let catalog = Catalog::builtin();
        let variant = catalog.get(Family::Free, Style::Solid).unwrap();
        let icons: Vec<IconDescriptor> = [
            IconRecord::new("arrow-up", "Arrow Up", "f062", &["solid"]),
            IconRecord::new("battery-half", "Battery 1/2", "f242", &["solid"]),
        ]
        .iter()
        .map(|r| IconDescriptor::build(r, Style::Solid, variant))
        .collect();
        let info = BuildInfo::new("fontawesome5", "2024/03/01", "5.15.4", "OpenType");
        build_context(Style::Solid, &icons, variant, &info).unwrap()
    }

    #[test]
    fn test_render_style() {
        let renderer = Renderer::builtin().unwrap();
        let out = renderer.render(TemplateKind::Style, &solid_context()).unwrap();

        assert!(out.contains(
            "\\ProvidesPackage{fontawesome5-free-solid}[2024/03/01 v5.15.4 Font Awesome 5 Free Solid (OpenType)]"
        ));
        assert!(out.contains("{Font Awesome 5 Free Solid}"));
        assert!(out.contains("FA@glyph@free-solid@arrow-up\\endcsname{\\char\"F062\\relax}"));
        assert!(out.contains("FA@glyph@free-solid@battery-half"));
        assert!(out.contains("\\input{fontawesome5-free-solid-macros.def}"));
    }

    #[test]
    fn test_render_macros() {
        let renderer = Renderer::builtin().unwrap();
        let out = renderer.render(TemplateKind::Macros, &solid_context()).unwrap();

        assert!(out.contains("\\csname faArrowUpSolid\\endcsname"));
        assert!(out.contains("\\csname faBatteryHalfSolid\\endcsname"));
        assert!(out.contains("\\FA@icon{free-solid}{arrow-up}{\\bfseries}"));
    }

    #[test]
    fn test_render_package_file_names() {
        let renderer = Renderer::builtin().unwrap();
        let artifacts = renderer.render_package(&solid_context()).unwrap();

        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["fontawesome5-free-solid.sty", "fontawesome5-free-solid-macros.def"]
        );
    }

    #[test]
    fn test_template_dir_override() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("macros.hbs"),
            "{{#each icons}}{{macro_name}}={{codepoint_upper}};{{/each}}",
        )
        .unwrap();

        let renderer = Renderer::with_template_dir(dir.path()).unwrap();
        let ctx = solid_context();

        let macros = renderer.render(TemplateKind::Macros, &ctx).unwrap();
        assert_eq!(macros, "faArrowUpSolid=F062;faBatteryHalfSolid=F242;");

        // Style template falls back to the builtin one
        let style = renderer.render(TemplateKind::Style, &ctx).unwrap();
        assert!(style.contains("\\ProvidesPackage"));
    }

    #[test]
    fn test_invalid_template() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("style.hbs"), "{{#each icons}}unclosed").unwrap();

        let result = Renderer::with_template_dir(dir.path());
        assert!(matches!(result, Err(FatexError::Parse { .. })));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_field() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("style.hbs"), "{{no_such_field}}").unwrap();

        let renderer = Renderer::with_template_dir(dir.path()).unwrap();
        let result = renderer.render(TemplateKind::Style, &solid_context());
        assert!(matches!(result, Err(FatexError::Render { .. })));
    }

    #[test]
    fn test_missing_template_dir() {
        let result = Renderer::with_template_dir(Path::new("/nonexistent/templates"));
        assert!(result.is_err());
    }
}
