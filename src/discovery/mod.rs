//! Release discovery and metadata loading for fatex.
//!
//! A build source is either an unpacked release directory, a release zip
//! (unpacked into the manifest's extract directory first), or a bare
//! metadata file. Release zips can also be fetched from GitHub.
//!
//! # Example
//!
//! ```ignore
//! use fatex::discovery::{discover_release, Manifest};
//!
//! let release = discover_release("fontawesome-free-5.15.4-desktop.zip".as_ref(), &Manifest::default())?;
//! let records = release.load_records()?;
//! ```

mod archive;
mod fetch;
mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{FatexError, Result};
use crate::types::{Family, IconRecord};

pub use archive::{extract_archive, is_archive};
pub use fetch::{
    fetch_release, pick_zip_asset, release_url, FetchedRelease, GithubReleases, ReleaseAsset,
    ReleaseInfo, ReleaseSource, RELEASES_API_URL,
};
pub use loader::{load_metadata, parse_metadata_json, parse_metadata_yaml};
pub use manifest::Manifest;
pub use scanner::{detect_family, detect_font_type, detect_version, find_font_files, find_metadata};

#[cfg(test)]
pub(crate) use fetch::tests::FakeReleases;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "fatex.yaml";

/// What was found for a build source.
#[derive(Debug)]
pub struct Release {
    /// Release root directory (None for a bare metadata file).
    pub root: Option<PathBuf>,

    /// The icon metadata file.
    pub metadata: PathBuf,

    /// Font files shipped with the release.
    pub fonts: Vec<PathBuf>,

    /// Family inferred from font file names.
    pub family: Option<Family>,

    /// Version inferred from the release directory name.
    pub version: Option<String>,

    /// Font container label inferred from font extensions.
    pub font_type: Option<&'static str>,
}

impl Release {
    /// Load and validate the metadata records.
    pub fn load_records(&self) -> Result<Vec<IconRecord>> {
        load_metadata(&self.metadata)
    }
}

/// Locate the metadata and fonts for `source`.
pub fn discover_release(source: &Path, manifest: &Manifest) -> Result<Release> {
    if source.is_file() && is_archive(source) {
        let root = extract_archive(source, &manifest.extract_dir)?;
        let mut release = discover_directory(&root, manifest)?;
        if release.version.is_none() {
            release.version = detect_version(source);
        }
        return Ok(release);
    }

    if source.is_file() {
        return Ok(Release {
            root: None,
            metadata: source.to_path_buf(),
            fonts: Vec::new(),
            family: None,
            version: detect_version(source),
            font_type: None,
        });
    }

    if source.is_dir() {
        return discover_directory(source, manifest);
    }

    Err(FatexError::Io {
        path: source.to_path_buf(),
        message: "Source not found".to_string(),
    })
}

fn discover_directory(root: &Path, manifest: &Manifest) -> Result<Release> {
    let metadata = find_metadata(root, &manifest.metadata_dir, &manifest.metadata_file)?;
    let fonts = find_font_files(root);

    Ok(Release {
        root: Some(root.to_path_buf()),
        version: detect_version(&metadata),
        family: detect_family(&fonts),
        font_type: detect_font_type(&fonts),
        metadata,
        fonts,
    })
}
