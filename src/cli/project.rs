//! Shared loading for commands that work on a release.

use std::path::PathBuf;

use clap::Args;

use crate::assemble::{assemble, Assembly};
use crate::discovery::{discover_release, Manifest, Release, MANIFEST_FILENAME};
use crate::error::{FatexError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Catalog, Family, IconRecord};

/// Where to find the release and how to read it.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Release directory, release zip, or metadata file (default: `source` from fatex.yaml)
    pub source: Option<PathBuf>,

    /// Font family (default: detected from the font files)
    #[arg(long)]
    pub family: Option<Family>,

    /// Project manifest
    #[arg(long, default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,
}

/// A loaded release ready for assembly.
#[derive(Debug)]
pub struct Project {
    pub manifest: Manifest,
    pub release: Release,
    pub family: Family,
    pub catalog: Catalog,
    pub records: Vec<IconRecord>,
}

impl Project {
    /// Resolve the manifest, discover the release and load its metadata.
    pub fn load(args: &SourceArgs, printer: &Printer) -> Result<Self> {
        let (manifest, has_manifest) = Manifest::load_or_default(&args.manifest)?;
        if has_manifest {
            printer.info("Manifest", &display_path(&args.manifest));
        }

        let source = args
            .source
            .clone()
            .or_else(|| manifest.source.clone())
            .ok_or_else(|| FatexError::Build {
                message: "No source given".to_string(),
                help: Some(format!(
                    "Pass a release directory, zip or metadata file, or set `source` in {}",
                    MANIFEST_FILENAME
                )),
            })?;

        printer.status("Scanning", &display_path(&source));
        let release = discover_release(&source, &manifest)?;

        let family = args
            .family
            .or(manifest.family)
            .or(release.family)
            .ok_or_else(|| FatexError::Build {
                message: "Could not determine the font family".to_string(),
                help: Some("Pass --family free or --family pro".to_string()),
            })?;

        let catalog = manifest.catalog()?;

        let records = release.load_records()?;
        printer.status(
            "Loaded",
            &format!(
                "{} from {}",
                plural(records.len(), "icon", "icons"),
                display_path(&release.metadata)
            ),
        );

        Ok(Self {
            manifest,
            release,
            family,
            catalog,
            records,
        })
    }

    /// Assemble the loaded records for the resolved family.
    pub fn assemble(&self) -> Result<Assembly> {
        assemble(&self.records, self.family, &self.catalog)
    }
}
