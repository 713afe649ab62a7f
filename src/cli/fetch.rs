//! Fetch command implementation.
//!
//! Downloads a release zip from GitHub and unpacks it, ready to be passed
//! to `fatex build`.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{
    discover_release, fetch_release, GithubReleases, Manifest, ReleaseSource, MANIFEST_FILENAME,
};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Download a Font Awesome release from GitHub
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Release tag, e.g. 5.15.4 (default: latest release)
    pub version: Option<String>,

    /// Download directory (default: `extract_dir` from fatex.yaml)
    #[arg(long, short)]
    pub dest: Option<PathBuf>,

    /// Project manifest
    #[arg(long, default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Download again even if the zip is already present
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: FetchArgs, printer: &Printer) -> Result<()> {
    let releases = GithubReleases::new()?;
    fetch_with(&releases, &args, printer).map(|_| ())
}

/// Fetch through `releases` and return the downloaded zip.
fn fetch_with(releases: &dyn ReleaseSource, args: &FetchArgs, printer: &Printer) -> Result<PathBuf> {
    let (manifest, _) = Manifest::load_or_default(&args.manifest)?;
    let dest = args.dest.clone().unwrap_or_else(|| manifest.extract_dir.clone());

    printer.status(
        "Fetching",
        args.version.as_deref().unwrap_or("latest release"),
    );
    let fetched = fetch_release(releases, args.version.as_deref(), &dest, args.force)?;
    if fetched.downloaded {
        printer.status("Downloaded", &display_path(&fetched.archive));
    } else {
        printer.info(
            "Reusing",
            &format!("{} (--force to download again)", display_path(&fetched.archive)),
        );
    }

    let release = discover_release(&fetched.archive, &manifest)?;
    let records = release.load_records()?;
    printer.status(
        "Unpacked",
        &format!(
            "{} {} ({})",
            fetched.tag.as_deref().unwrap_or("release"),
            release
                .family
                .map(|f| format!("{} family", f))
                .unwrap_or_else(|| "unknown family".to_string()),
            plural(records.len(), "icon", "icons")
        ),
    );
    printer.info(
        "Next",
        &format!("fatex build {}", display_path(&fetched.archive)),
    );

    Ok(fetched.archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::FakeReleases;
    use crate::error::FatexError;
    use std::fs;
    use tempfile::tempdir;

    const ICONS: &str = "bell:\n  label: Bell\n  unicode: f0f3\n  styles: [solid]\n";

    fn fetch_args(dir: &std::path::Path, version: Option<&str>) -> FetchArgs {
        let manifest = dir.join(MANIFEST_FILENAME);
        fs::write(
            &manifest,
            format!("extract_dir: {}\n", dir.join("tmp").display()),
        )
        .unwrap();

        FetchArgs {
            version: version.map(str::to_string),
            dest: Some(dir.join("downloads")),
            manifest,
            force: false,
        }
    }

    #[test]
    fn test_fetch_latest_then_discover() {
        let dir = tempdir().unwrap();
        let releases = FakeReleases::new("5.15.4", ICONS);

        let archive = fetch_with(&releases, &fetch_args(dir.path(), None), &Printer::plain()).unwrap();

        assert_eq!(
            archive,
            dir.path().join("downloads/fontawesome-free-5.15.4-desktop.zip")
        );
        let release = discover_release(&archive, &Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap()).unwrap();
        assert_eq!(release.version.as_deref(), Some("5.15.4"));
        assert_eq!(release.load_records().unwrap().len(), 1);
    }

    #[test]
    fn test_fetch_reuses_download() {
        let dir = tempdir().unwrap();
        let releases = FakeReleases::new("5.15.4", ICONS);
        let args = fetch_args(dir.path(), Some("5.15.4"));

        fetch_with(&releases, &args, &Printer::plain()).unwrap();
        fetch_with(&releases, &args, &Printer::plain()).unwrap();
        assert_eq!(releases.downloads.get(), 1);
    }

    #[test]
    fn test_fetch_missing_version() {
        let dir = tempdir().unwrap();
        let releases = FakeReleases::new("5.15.4", ICONS);

        let result = fetch_with(&releases, &fetch_args(dir.path(), Some("5.0.0")), &Printer::plain());
        assert!(matches!(result, Err(FatexError::Fetch { .. })));
        assert!(!dir.path().join("downloads").exists());
    }
}
