//! Build command implementation.
//!
//! Assembles the release metadata and writes one style definitions file and
//! one macro definitions file per package variant.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::assemble::SkipReport;
use crate::error::{FatexError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{build_context, Artifact, BuildInfo, Renderer};
use crate::types::Family;
use crate::validation::{print_diagnostics, validate_assembly};

use super::project::{Project, SourceArgs};

/// Font container label used when the release has no font files.
const DEFAULT_FONT_TYPE: &str = "OpenType";

/// Generate LaTeX packages from a Font Awesome release
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Font version (default: detected from the release directory name)
    #[arg(long)]
    pub font_version: Option<String>,

    /// Build date, YYYY/MM/DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory with style.hbs / macros.hbs template overrides
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Copy the release font files into <output>/fonts
    #[arg(long)]
    pub copy_fonts: bool,

    /// Overwrite existing package files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.source, printer)?;
    let manifest = &project.manifest;

    let assembly = project.assemble()?;
    if !assembly.skipped().is_empty() {
        printer.warning("Skipped", &skip_summary(assembly.skipped(), project.family));
    }

    let diagnostics = validate_assembly(&assembly, &project.catalog);
    print_diagnostics(&diagnostics, printer);

    let info = BuildInfo::new(
        manifest.package.clone(),
        args.date
            .clone()
            .or_else(|| manifest.date.clone())
            .unwrap_or_else(BuildInfo::today),
        args.font_version
            .clone()
            .or_else(|| manifest.version.clone())
            .or_else(|| project.release.version.clone())
            .unwrap_or_default(),
        project.release.font_type.unwrap_or(DEFAULT_FONT_TYPE),
    );

    let renderer = match args.templates.as_ref().or(manifest.templates.as_ref()) {
        Some(dir) => Renderer::with_template_dir(dir)?,
        None => Renderer::builtin()?,
    };

    // Render everything before touching the output directory
    let mut artifacts: Vec<Artifact> = Vec::new();
    let mut packages = 0;
    for variant in project.catalog.for_family(project.family) {
        let icons = assembly.icons(variant.style);
        if icons.is_empty() {
            continue;
        }

        let ctx = build_context(variant.style, icons, variant, &info)?;
        printer.status(
            "Rendering",
            &format!(
                "{}-{} ({})",
                ctx.package_name,
                ctx.variant_id,
                plural(ctx.icons.len(), "icon", "icons")
            ),
        );
        artifacts.extend(renderer.render_package(&ctx)?);
        packages += 1;
    }

    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    write_artifacts(&artifacts, &output, args.force, printer)?;

    if args.copy_fonts || manifest.copy_fonts {
        copy_fonts(&project.release.fonts, &output.join("fonts"), printer)?;
    }

    printer.status(
        "Finished",
        &format!(
            "{} ({}) to {}",
            plural(packages, "package", "packages"),
            plural(assembly.total(), "icon", "icons"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Skipped styles include unknown tags as well as other families' styles.
fn skip_summary(skipped: &SkipReport, family: Family) -> String {
    format!(
        "{} not packaged for the {} family",
        plural(skipped.count(), "icon style", "icon styles"),
        family
    )
}

/// Write artifacts into `output`. Existing files are an error unless `force`.
fn write_artifacts(artifacts: &[Artifact], output: &Path, force: bool, printer: &Printer) -> Result<()> {
    if !force {
        let existing: Vec<&str> = artifacts
            .iter()
            .filter(|a| output.join(&a.file_name).exists())
            .map(|a| a.file_name.as_str())
            .collect();
        if !existing.is_empty() {
            return Err(FatexError::Build {
                message: format!("{} already exists", existing.join(", ")),
                help: Some("Use --force to overwrite".to_string()),
            });
        }
    }

    fs::create_dir_all(output).map_err(|e| FatexError::Io {
        path: output.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    for artifact in artifacts {
        let path = output.join(&artifact.file_name);
        fs::write(&path, &artifact.contents).map_err(|e| FatexError::Io {
            path: path.clone(),
            message: format!("Failed to write package file: {}", e),
        })?;
        printer.status("Writing", &display_path(&path));
    }

    Ok(())
}

fn copy_fonts(fonts: &[PathBuf], dest: &Path, printer: &Printer) -> Result<()> {
    if fonts.is_empty() {
        printer.warning("Skipping", "font copy, the source has no font files");
        return Ok(());
    }

    fs::create_dir_all(dest).map_err(|e| FatexError::Io {
        path: dest.to_path_buf(),
        message: format!("Failed to create font directory: {}", e),
    })?;

    for font in fonts {
        let Some(name) = font.file_name() else {
            continue;
        };
        let target = dest.join(name);
        fs::copy(font, &target).map_err(|e| FatexError::Io {
            path: font.clone(),
            message: format!("Failed to copy font: {}", e),
        })?;
    }

    printer.status(
        "Copied",
        &format!("{} to {}", plural(fonts.len(), "font", "fonts"), display_path(dest)),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use crate::discovery::MANIFEST_FILENAME;
    use crate::types::{Catalog, IconRecord};
    use tempfile::tempdir;

    const ICONS: &str = r#"
arrow-up:
  label: Arrow Up
  styles: [solid]
  unicode: f062
bell:
  label: Bell
  styles: [solid, regular, light]
  unicode: f0f3
github:
  label: GitHub
  styles: [brands]
  unicode: f09b
500px:
  label: 500px
  styles: [brands]
  unicode: f26e
"#;

    fn write_release(root: &Path, family: &str) -> PathBuf {
        let release = root.join(format!("fontawesome-{}-5.15.4-desktop", family));
        fs::create_dir_all(release.join("metadata")).unwrap();
        fs::create_dir_all(release.join("otfs")).unwrap();
        fs::write(release.join("metadata/icons.yml"), ICONS).unwrap();
        let font = if family == "pro" {
            "Font Awesome 5 Pro-Light-300.otf"
        } else {
            "Font Awesome 5 Free-Solid-900.otf"
        };
        fs::write(release.join("otfs").join(font), "font").unwrap();
        release
    }

    fn args(source: PathBuf, output: PathBuf, manifest: PathBuf) -> BuildArgs {
        BuildArgs {
            source: SourceArgs {
                source: Some(source),
                family: None,
                manifest,
            },
            font_version: None,
            date: Some("2024/03/01".to_string()),
            output: Some(output),
            templates: None,
            copy_fonts: false,
            force: false,
        }
    }

    #[test]
    fn test_build_free_release() {
        let dir = tempdir().unwrap();
        let release = write_release(dir.path(), "free");
        let output = dir.path().join("dist");

        run(
            args(release, output.clone(), dir.path().join(MANIFEST_FILENAME)),
            &Printer::plain(),
        )
        .unwrap();

        for name in [
            "fontawesome5-free-regular.sty",
            "fontawesome5-free-regular-macros.def",
            "fontawesome5-free-solid.sty",
            "fontawesome5-free-solid-macros.def",
            "fontawesome5-brands.sty",
            "fontawesome5-brands-macros.def",
        ] {
            assert!(output.join(name).exists(), "missing {}", name);
        }
        assert!(!output.join("fontawesome5-pro-light.sty").exists());

        let style = fs::read_to_string(output.join("fontawesome5-free-solid.sty")).unwrap();
        assert!(style.contains("[2024/03/01 v5.15.4 Font Awesome 5 Free Solid (OpenType)]"));

        let brands = fs::read_to_string(output.join("fontawesome5-brands-macros.def")).unwrap();
        assert!(brands.contains("faFiveZeroZeropx"));
        assert!(brands.contains("{fivehundredpx}"));
        assert!(brands.contains("faGitHub"));
    }

    #[test]
    fn test_build_pro_release() {
        let dir = tempdir().unwrap();
        let release = write_release(dir.path(), "pro");
        let output = dir.path().join("dist");

        run(
            args(release, output.clone(), dir.path().join(MANIFEST_FILENAME)),
            &Printer::plain(),
        )
        .unwrap();

        let light = fs::read_to_string(output.join("fontawesome5-pro-light-macros.def")).unwrap();
        assert!(light.contains("faBellLight"));
        assert!(!light.contains("faArrowUp"));
    }

    #[test]
    fn test_build_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let release = write_release(dir.path(), "free");
        let output = dir.path().join("dist");
        let manifest = dir.path().join(MANIFEST_FILENAME);

        run(args(release.clone(), output.clone(), manifest.clone()), &Printer::plain()).unwrap();

        let second = run(args(release.clone(), output.clone(), manifest.clone()), &Printer::plain());
        assert!(matches!(second, Err(FatexError::Build { .. })));

        let mut forced = args(release, output, manifest);
        forced.force = true;
        run(forced, &Printer::plain()).unwrap();
    }

    #[test]
    fn test_build_missing_version() {
        let dir = tempdir().unwrap();
        let icons = dir.path().join("icons.yml");
        fs::write(&icons, ICONS).unwrap();

        let mut build = args(icons, dir.path().join("dist"), dir.path().join(MANIFEST_FILENAME));
        build.source.family = Some(Family::Free);

        let result = run(build, &Printer::plain());
        assert!(matches!(result, Err(FatexError::MissingVersion { .. })));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_build_collision_writes_nothing() {
        let dir = tempdir().unwrap();
        let icons = dir.path().join("icons.yml");
        fs::write(
            &icons,
            "a:\n  label: Same\n  unicode: f001\n  styles: [solid]\nb:\n  label: Same\n  unicode: f002\n  styles: [solid]\n",
        )
        .unwrap();

        let mut build = args(icons, dir.path().join("dist"), dir.path().join(MANIFEST_FILENAME));
        build.source.family = Some(Family::Free);
        build.font_version = Some("5.15.4".to_string());

        let result = run(build, &Printer::plain());
        assert!(matches!(result, Err(FatexError::NameCollision { .. })));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_build_copies_fonts() {
        let dir = tempdir().unwrap();
        let release = write_release(dir.path(), "free");
        let output = dir.path().join("dist");

        let mut build = args(release, output.clone(), dir.path().join(MANIFEST_FILENAME));
        build.copy_fonts = true;
        run(build, &Printer::plain()).unwrap();

        assert!(output
            .join("fonts/Font Awesome 5 Free-Solid-900.otf")
            .exists());
    }

    #[test]
    fn test_build_with_manifest_overrides() {
        let dir = tempdir().unwrap();
        let release = write_release(dir.path(), "free");
        let output = dir.path().join("dist");
        let manifest = dir.path().join(MANIFEST_FILENAME);
        fs::write(
            &manifest,
            "package: fa5\nversion: 5.0.0\nvariants:\n  - style: brands\n    prefix: fab\n",
        )
        .unwrap();

        run(args(release, output.clone(), manifest), &Printer::plain()).unwrap();

        let brands = fs::read_to_string(output.join("fa5-brands-macros.def")).unwrap();
        assert!(brands.contains("fabGitHub"));
        let style = fs::read_to_string(output.join("fa5-brands.sty")).unwrap();
        assert!(style.contains("v5.0.0"));
    }

    #[test]
    fn test_skip_summary_counts_unknown_styles() {
        let records = vec![
            IconRecord::new("bell", "Bell", "f0f3", &["solid", "light"]),
            IconRecord::new("cat", "Cat", "f6be", &["solid", "duotone"]),
        ];
        let assembly = assemble(&records, Family::Free, &Catalog::builtin()).unwrap();

        assert_eq!(
            skip_summary(assembly.skipped(), Family::Free),
            "2 icon styles not packaged for the free family"
        );
    }
}
