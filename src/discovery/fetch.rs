//! Release download from GitHub.
//!
//! Resolves a Font Awesome release (latest or a tag), picks its desktop zip
//! asset and downloads it. The downloaded zip is an ordinary build source.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FatexError, Result};

/// GitHub releases endpoint of the Font Awesome repository.
pub const RELEASES_API_URL: &str = "https://api.github.com/repos/FortAwesome/Font-Awesome/releases";

/// The parts of a GitHub release we read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseInfo {
    pub tag_name: Option<String>,
    pub assets: Vec<ReleaseAsset>,
    /// Set by the API instead of the fields above, e.g. "Not Found".
    pub message: Option<String>,
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl ReleaseAsset {
    /// Local file name: the asset name, or the last URL segment.
    pub fn file_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.browser_download_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.browser_download_url)
    }

    fn is_zip(&self) -> bool {
        self.file_name().to_ascii_lowercase().ends_with(".zip")
    }
}

/// Where releases come from.
pub trait ReleaseSource {
    /// Release metadata for `version`, or the latest release when `None`.
    fn release_info(&self, version: Option<&str>) -> Result<ReleaseInfo>;

    /// Download `url` into the file `dest`.
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Releases API URL for `version` (`/latest` or `/tags/<version>`).
pub fn release_url(api_url: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("{}/tags/{}", api_url.trim_end_matches('/'), version),
        None => format!("{}/latest", api_url.trim_end_matches('/')),
    }
}

/// Pick the zip to download. A `-desktop.zip` asset is preferred over
/// other zips (the web kit ships next to it).
pub fn pick_zip_asset<'a>(info: &'a ReleaseInfo, version: Option<&str>) -> Result<&'a ReleaseAsset> {
    if info.message.as_deref() == Some("Not Found") {
        return Err(not_found(version));
    }

    let zips: Vec<&ReleaseAsset> = info.assets.iter().filter(|a| a.is_zip()).collect();
    zips.iter()
        .find(|a| a.file_name().to_ascii_lowercase().ends_with("-desktop.zip"))
        .or_else(|| zips.first())
        .copied()
        .ok_or_else(|| FatexError::Fetch {
            message: format!(
                "Release {} has no zip file",
                info.tag_name.as_deref().or(version).unwrap_or("latest")
            ),
            help: Some("Download the release by hand and pass the zip as the source".to_string()),
        })
}

fn not_found(version: Option<&str>) -> FatexError {
    FatexError::Fetch {
        message: format!("Release {} was not found", version.unwrap_or("latest")),
        help: version.map(|_| "Omit the version to fetch the latest release".to_string()),
    }
}

/// A release zip on disk.
#[derive(Debug)]
pub struct FetchedRelease {
    pub tag: Option<String>,
    pub archive: PathBuf,
    /// False when an earlier download was reused.
    pub downloaded: bool,
}

/// Resolve `version` and download its zip into `dest`.
///
/// An existing zip of the same name is reused unless `force`.
pub fn fetch_release(
    source: &dyn ReleaseSource,
    version: Option<&str>,
    dest: &Path,
    force: bool,
) -> Result<FetchedRelease> {
    let info = source.release_info(version)?;
    let asset = pick_zip_asset(&info, version)?;
    let archive = dest.join(asset.file_name());

    if archive.exists() && !force {
        return Ok(FetchedRelease {
            tag: info.tag_name.clone(),
            archive,
            downloaded: false,
        });
    }

    fs::create_dir_all(dest).map_err(|e| FatexError::Io {
        path: dest.to_path_buf(),
        message: format!("Failed to create download directory: {}", e),
    })?;
    source.download(&asset.browser_download_url, &archive)?;

    Ok(FetchedRelease {
        tag: info.tag_name.clone(),
        archive,
        downloaded: true,
    })
}

/// GitHub releases over HTTPS.
pub struct GithubReleases {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl GithubReleases {
    pub fn new() -> Result<Self> {
        Self::with_api_url(RELEASES_API_URL)
    }

    /// Client for a mirror of the releases API.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(300))
            .user_agent(concat!("fatex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FatexError::Fetch {
                message: format!("Failed to create HTTP client: {}", e),
                help: None,
            })?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

impl ReleaseSource for GithubReleases {
    fn release_info(&self, version: Option<&str>) -> Result<ReleaseInfo> {
        let url = release_url(&self.api_url, version);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| FatexError::Fetch {
                message: format!("Failed to query {}: {}", url, e),
                help: None,
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(not_found(version));
        }
        if !response.status().is_success() {
            return Err(FatexError::Fetch {
                message: format!("{} returned HTTP {}", url, response.status()),
                help: None,
            });
        }

        response.json().map_err(|e| FatexError::Fetch {
            message: format!("Unexpected release data from {}: {}", url, e),
            help: None,
        })
    }

    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self.client.get(url).send().map_err(|e| FatexError::Fetch {
            message: format!("Failed to download {}: {}", url, e),
            help: None,
        })?;

        if !response.status().is_success() {
            return Err(FatexError::Fetch {
                message: format!("Download of {} failed: HTTP {}", url, response.status()),
                help: None,
            });
        }

        // Only a complete download takes the final name
        let partial = dest.with_extension("part");
        let mut file = File::create(&partial).map_err(|e| FatexError::Io {
            path: partial.clone(),
            message: format!("Failed to create download file: {}", e),
        })?;
        response.copy_to(&mut file).map_err(|e| FatexError::Fetch {
            message: format!("Download of {} interrupted: {}", url, e),
            help: None,
        })?;
        drop(file);

        fs::rename(&partial, dest).map_err(|e| FatexError::Io {
            path: dest.to_path_buf(),
            message: format!("Failed to move download into place: {}", e),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    /// Serves one release from memory and counts downloads.
    pub(crate) struct FakeReleases {
        pub info: ReleaseInfo,
        pub icons: &'static str,
        pub downloads: Cell<usize>,
    }

    impl FakeReleases {
        pub(crate) fn new(tag: &str, icons: &'static str) -> Self {
            let name = format!("fontawesome-free-{}-desktop.zip", tag);
            Self {
                info: ReleaseInfo {
                    tag_name: Some(tag.to_string()),
                    assets: vec![
                        asset(&format!("fontawesome-free-{}-web.zip", tag)),
                        asset(&name),
                    ],
                    message: None,
                },
                icons,
                downloads: Cell::new(0),
            }
        }
    }

    impl ReleaseSource for FakeReleases {
        fn release_info(&self, version: Option<&str>) -> Result<ReleaseInfo> {
            match version {
                Some(v) if Some(v) != self.info.tag_name.as_deref() => Ok(ReleaseInfo {
                    message: Some("Not Found".to_string()),
                    ..Default::default()
                }),
                _ => Ok(self.info.clone()),
            }
        }

        fn download(&self, _url: &str, dest: &Path) -> Result<()> {
            self.downloads.set(self.downloads.get() + 1);
            let top = dest
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("release")
                .to_string();
            let file = File::create(dest)?;
            let mut zip = zip::ZipWriter::new(file);
            zip.start_file(format!("{}/metadata/icons.yml", top), SimpleFileOptions::default())
                .unwrap();
            zip.write_all(self.icons.as_bytes())?;
            zip.start_file(
                format!("{}/otfs/Font Awesome 5 Free-Solid-900.otf", top),
                SimpleFileOptions::default(),
            )
            .unwrap();
            zip.finish().unwrap();
            Ok(())
        }
    }

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            browser_download_url: format!("https://example.com/download/{}", name),
        }
    }

    #[test]
    fn test_release_url() {
        assert_eq!(
            release_url(RELEASES_API_URL, None),
            "https://api.github.com/repos/FortAwesome/Font-Awesome/releases/latest"
        );
        assert_eq!(
            release_url("https://mirror.test/releases/", Some("5.15.4")),
            "https://mirror.test/releases/tags/5.15.4"
        );
    }

    #[test]
    fn test_parse_release_info() {
        let json = r#"{
            "tag_name": "5.15.4",
            "assets": [
                {"name": "fontawesome-free-5.15.4-desktop.zip", "size": 1,
                 "browser_download_url": "https://github.com/x/fontawesome-free-5.15.4-desktop.zip"}
            ],
            "zipball_url": "https://api.github.com/zipball/5.15.4"
        }"#;
        let info: ReleaseInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.tag_name.as_deref(), Some("5.15.4"));
        assert_eq!(
            pick_zip_asset(&info, None).unwrap().file_name(),
            "fontawesome-free-5.15.4-desktop.zip"
        );
    }

    #[test]
    fn test_pick_prefers_desktop_zip() {
        let info = FakeReleases::new("5.15.4", "").info;
        assert_eq!(
            pick_zip_asset(&info, None).unwrap().file_name(),
            "fontawesome-free-5.15.4-desktop.zip"
        );
    }

    #[test]
    fn test_pick_falls_back_to_any_zip() {
        let info = ReleaseInfo {
            tag_name: Some("6.0.0".to_string()),
            assets: vec![asset("notes.txt"), asset("fontawesome-6.0.0.zip")],
            message: None,
        };
        assert_eq!(
            pick_zip_asset(&info, None).unwrap().file_name(),
            "fontawesome-6.0.0.zip"
        );
    }

    #[test]
    fn test_pick_without_zip() {
        let info = ReleaseInfo {
            tag_name: Some("6.0.0".to_string()),
            assets: vec![asset("notes.txt")],
            message: None,
        };
        assert!(matches!(
            pick_zip_asset(&info, None),
            Err(FatexError::Fetch { .. })
        ));
    }

    #[test]
    fn test_pick_not_found() {
        let info = ReleaseInfo {
            message: Some("Not Found".to_string()),
            ..Default::default()
        };
        let err = pick_zip_asset(&info, Some("9.9.9")).unwrap_err();
        assert!(err.to_string().contains("9.9.9"));
    }

    #[test]
    fn test_asset_file_name_from_url() {
        let asset = ReleaseAsset {
            name: String::new(),
            browser_download_url: "https://example.com/a/b/release.zip".to_string(),
        };
        assert_eq!(asset.file_name(), "release.zip");
    }

    #[test]
    fn test_fetch_release_downloads_once() {
        let dir = tempdir().unwrap();
        let source = FakeReleases::new("5.15.4", "{}\n");

        let fetched = fetch_release(&source, None, dir.path(), false).unwrap();
        assert!(fetched.downloaded);
        assert_eq!(
            fetched.archive,
            dir.path().join("fontawesome-free-5.15.4-desktop.zip")
        );
        assert!(fetched.archive.exists());

        let again = fetch_release(&source, Some("5.15.4"), dir.path(), false).unwrap();
        assert!(!again.downloaded);
        assert_eq!(source.downloads.get(), 1);

        fetch_release(&source, None, dir.path(), true).unwrap();
        assert_eq!(source.downloads.get(), 2);
    }

    #[test]
    fn test_fetch_unknown_version() {
        let dir = tempdir().unwrap();
        let source = FakeReleases::new("5.15.4", "{}\n");

        let result = fetch_release(&source, Some("4.7.0"), dir.path(), false);
        assert!(matches!(result, Err(FatexError::Fetch { .. })));
        assert_eq!(source.downloads.get(), 0);
    }
}
