//! Init command implementation.
//!
//! Generates a `fatex.yaml` manifest pointing at the release found in a
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{
    detect_family, detect_version, find_font_files, find_metadata, is_archive, Manifest,
    MANIFEST_FILENAME,
};
use crate::error::{FatexError, Result};
use crate::output::{display_path, Printer};
use crate::types::Family;

/// Initialize a fatex project by generating a fatex.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing fatex.yaml
    #[arg(long)]
    pub force: bool,
}

/// What init found in the project directory.
#[derive(Debug, Default, PartialEq)]
struct Detected {
    source: Option<PathBuf>,
    family: Option<Family>,
    version: Option<String>,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(FatexError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let detected = detect(&args.path)?;

    match &detected.source {
        Some(source) => printer.info("Discovered", &source.display().to_string()),
        None => printer.warning(
            "Missing",
            "no release found, set `source` in the manifest before building",
        ),
    }

    let yaml = manifest_yaml(&detected);
    fs::write(&manifest_path, &yaml).map_err(|e| FatexError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}

/// Look for an unpacked release first, then a release zip.
fn detect(root: &Path) -> Result<Detected> {
    let defaults = Manifest::default();

    if let Ok(metadata) = find_metadata(root, &defaults.metadata_dir, &defaults.metadata_file) {
        // <release>/metadata/icons.yml
        let release = metadata
            .parent()
            .and_then(Path::parent)
            .unwrap_or(root)
            .to_path_buf();
        let fonts = find_font_files(&release);
        let source = release
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| release.clone());

        return Ok(Detected {
            source: Some(if source.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                source
            }),
            family: detect_family(&fonts),
            version: detect_version(&metadata),
        });
    }

    let mut archives: Vec<PathBuf> = fs::read_dir(root)
        .map_err(|e| FatexError::Io {
            path: root.to_path_buf(),
            message: format!("Failed to read directory: {}", e),
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_archive(path) && detect_version(path).is_some())
        .collect();
    archives.sort();

    // Newest release wins when several zips sit side by side
    let Some(archive) = archives.pop() else {
        return Ok(Detected::default());
    };
    let name = archive
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| archive.clone());
    let family = name.to_str().and_then(|n| {
        if n.contains("-pro-") {
            Some(Family::Pro)
        } else if n.contains("-free-") {
            Some(Family::Free)
        } else {
            None
        }
    });

    Ok(Detected {
        version: detect_version(&name),
        source: Some(name),
        family,
    })
}

fn manifest_yaml(detected: &Detected) -> String {
    // Build YAML manually for clean formatting
    let mut yaml = String::new();

    match &detected.source {
        Some(source) => yaml.push_str(&format!("source: \"{}\"\n", source.display())),
        None => yaml.push_str("# source: fontawesome-free-5.15.4-desktop\n"),
    }
    yaml.push_str("output: dist\n");
    yaml.push_str("package: fontawesome5\n");
    if let Some(family) = detected.family {
        yaml.push_str(&format!("family: {}\n", family));
    }
    if let Some(version) = &detected.version {
        yaml.push_str(&format!("version: \"{}\"\n", version));
    }

    yaml
}
