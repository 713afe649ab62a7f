//! Release archive extraction.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{FatexError, Result};

/// Whether `path` names a zip archive.
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// Unpack `archive` into a fresh `dest/<archive stem>` directory.
///
/// Returns the archive's single top-level directory when it has one,
/// otherwise the per-archive directory. Nothing left in `dest` by other
/// archives is reachable from the returned path.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<PathBuf> {
    let file = File::open(archive).map_err(|e| FatexError::Io {
        path: archive.to_path_buf(),
        message: format!("Failed to open archive: {}", e),
    })?;

    let mut zip = zip::ZipArchive::new(file).map_err(|e| FatexError::Parse {
        message: format!("{} is not a zip archive: {}", archive.display(), e),
        help: None,
    })?;
    let root = single_root(zip.file_names()).map(str::to_string);

    let stem = archive
        .file_stem()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("archive"));
    let target = dest.join(stem);

    // Stale files from an earlier extraction would leak into discovery
    if target.exists() {
        fs::remove_dir_all(&target).map_err(|e| FatexError::Io {
            path: target.clone(),
            message: format!("Failed to clear extract directory: {}", e),
        })?;
    }
    fs::create_dir_all(&target).map_err(|e| FatexError::Io {
        path: target.clone(),
        message: format!("Failed to create extract directory: {}", e),
    })?;

    zip.extract(&target).map_err(|e| FatexError::Io {
        path: archive.to_path_buf(),
        message: format!("Failed to extract archive: {}", e),
    })?;

    Ok(match root {
        Some(root) => target.join(root),
        None => target,
    })
}

/// The top-level directory shared by every entry, if there is exactly one.
fn single_root<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut root = None;
    for name in names {
        let (first, _) = name.split_once('/')?;
        match root {
            None => root = Some(first),
            Some(seen) if seen == first => {}
            Some(_) => return None,
        }
    }
    root
}
