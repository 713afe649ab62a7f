//! Release scanner.
//!
//! Finds the metadata file and the font files inside an unpacked release,
//! and reads what it can about the release from file and directory names.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FatexError, Result};
use crate::types::Family;

/// Font file extensions recognised in a release.
const FONT_EXTENSIONS: &[&str] = &["otf", "ttf"];

/// Find `<dir_name>/<file_name>` below `root`.
///
/// Exactly one match is expected; a release with several metadata
/// directories is ambiguous.
pub fn find_metadata(root: &Path, dir_name: &str, file_name: &str) -> Result<PathBuf> {
    let mut matches: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.file_name().and_then(|n| n.to_str()) == Some(file_name)
                && path
                    .parent()
                    .and_then(|p| p.file_name())
                    .and_then(|n| n.to_str())
                    == Some(dir_name)
        })
        .collect();
    matches.sort();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(FatexError::Build {
            message: format!(
                "No {}/{} found in {}",
                dir_name,
                file_name,
                root.display()
            ),
            help: Some("Point fatex at an unpacked Font Awesome release".to_string()),
        }),
        n => Err(FatexError::Build {
            message: format!(
                "Found {} {}/{} files in {}",
                n,
                dir_name,
                file_name,
                root.display()
            ),
            help: Some("Point fatex at a single release directory".to_string()),
        }),
    }
}

/// Font files below `root`, sorted by path.
pub fn find_font_files(root: &Path) -> Vec<PathBuf> {
    let mut fonts: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_font_file(path))
        .collect();
    fonts.sort();
    fonts
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| FONT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Infer the family from font file names. Pro wins over free.
pub fn detect_family(fonts: &[PathBuf]) -> Option<Family> {
    let names: Vec<&str> = fonts
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();

    if names.iter().any(|n| n.contains("Pro")) {
        Some(Family::Pro)
    } else if names.iter().any(|n| n.contains("Free")) {
        Some(Family::Free)
    } else {
        None
    }
}

/// Read the version from a release directory name such as
/// `fontawesome-free-5.15.4-desktop`.
pub fn detect_version(path: &Path) -> Option<String> {
    path.components()
        .filter_map(|c| c.as_os_str().to_str())
        .filter(|name| name.starts_with("fontawesome-"))
        .find_map(|name| {
            let stem = name.strip_suffix(".zip").unwrap_or(name);
            stem.split('-').find(|part| is_version(part)).map(str::to_string)
        })
}

fn is_version(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() >= 2
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

/// Label for the font container used by the release.
pub fn detect_font_type(fonts: &[PathBuf]) -> Option<&'static str> {
    let has = |ext: &str| {
        fonts.iter().any(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(ext))
                .unwrap_or(false)
        })
    };

    if has("otf") {
        Some("OpenType")
    } else if has("ttf") {
        Some("TrueType")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_find_metadata() {
        let dir = tempdir().unwrap();
        let release = dir.path().join("fontawesome-free-5.15.4-desktop");
        touch(&release.join("metadata/icons.yml"));
        touch(&release.join("metadata/categories.yml"));
        touch(&release.join("other/icons.yml"));

        let found = find_metadata(dir.path(), "metadata", "icons.yml").unwrap();
        assert_eq!(found, release.join("metadata/icons.yml"));
    }

    #[test]
    fn test_find_metadata_missing() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("icons.yml"));

        let result = find_metadata(dir.path(), "metadata", "icons.yml");
        assert!(matches!(result, Err(FatexError::Build { .. })));
    }

    #[test]
    fn test_find_metadata_ambiguous() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a/metadata/icons.yml"));
        touch(&dir.path().join("b/metadata/icons.yml"));

        let err = find_metadata(dir.path(), "metadata", "icons.yml").unwrap_err();
        assert!(err.to_string().contains("Found 2"));
    }

    #[test]
    fn test_find_font_files() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("otfs/Font Awesome 5 Free-Solid-900.otf"));
        touch(&dir.path().join("otfs/Font Awesome 5 Brands-Regular-400.OTF"));
        touch(&dir.path().join("otfs/README.txt"));

        let fonts = find_font_files(dir.path());
        assert_eq!(fonts.len(), 2);
        assert_eq!(detect_font_type(&fonts), Some("OpenType"));
    }

    #[test]
    fn test_detect_family() {
        let free = vec![
            PathBuf::from("otfs/Font Awesome 5 Free-Solid-900.otf"),
            PathBuf::from("otfs/Font Awesome 5 Brands-Regular-400.otf"),
        ];
        assert_eq!(detect_family(&free), Some(Family::Free));

        let pro = vec![
            PathBuf::from("otfs/Font Awesome 5 Pro-Light-300.otf"),
            PathBuf::from("otfs/Font Awesome 5 Brands-Regular-400.otf"),
        ];
        assert_eq!(detect_family(&pro), Some(Family::Pro));

        let brands_only = vec![PathBuf::from("Font Awesome 5 Brands-Regular-400.otf")];
        assert_eq!(detect_family(&brands_only), None);
    }

    #[test]
    fn test_detect_version() {
        assert_eq!(
            detect_version(Path::new("tmp/fontawesome-free-5.15.4-desktop/metadata/icons.yml")),
            Some("5.15.4".to_string())
        );
        assert_eq!(
            detect_version(Path::new("fontawesome-pro-5.9.0-web.zip")),
            Some("5.9.0".to_string())
        );
        assert_eq!(detect_version(Path::new("metadata/icons.yml")), None);
        assert_eq!(detect_version(Path::new("fontawesome-free-desktop")), None);
    }

    #[test]
    fn test_detect_font_type_ttf() {
        let fonts = vec![PathBuf::from("webfonts/fa-solid-900.ttf")];
        assert_eq!(detect_font_type(&fonts), Some("TrueType"));
        assert_eq!(detect_font_type(&[]), None);
    }
}
