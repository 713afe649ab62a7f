//! Project manifest (fatex.yaml) parsing.
//!
//! The manifest holds the defaults for a build: where the release lives,
//! where packages go, and how the builtin package variants are adjusted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FatexError, Result};
use crate::types::{Catalog, Family, VariantOverride};

/// Project manifest loaded from fatex.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Release directory, release zip, or metadata file.
    pub source: Option<PathBuf>,

    /// Output directory for generated packages.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// LaTeX package base name.
    #[serde(default = "default_package")]
    pub package: String,

    /// Font family; detected from the font files when unset.
    pub family: Option<Family>,

    /// Font release version; detected from the release directory name when unset.
    pub version: Option<String>,

    /// Build date (YYYY/MM/DD); today when unset.
    pub date: Option<String>,

    /// Directory with `style.hbs` / `macros.hbs` overrides.
    pub templates: Option<PathBuf>,

    /// Name of the metadata directory inside a release.
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: String,

    /// Name of the metadata file inside the metadata directory.
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,

    /// Where release archives are unpacked.
    #[serde(default = "default_extract_dir")]
    pub extract_dir: PathBuf,

    /// Copy the release font files next to the generated packages.
    pub copy_fonts: bool,

    /// Adjustments to the builtin package variants.
    pub variants: Vec<VariantOverride>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_package() -> String {
    "fontawesome5".to_string()
}

fn default_metadata_dir() -> String {
    "metadata".to_string()
}

fn default_metadata_file() -> String {
    "icons.yml".to_string()
}

fn default_extract_dir() -> PathBuf {
    PathBuf::from("tmp")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            source: None,
            output: default_output(),
            package: default_package(),
            family: None,
            version: None,
            date: None,
            templates: None,
            metadata_dir: default_metadata_dir(),
            metadata_file: default_metadata_file(),
            extract_dir: default_extract_dir(),
            copy_fonts: false,
            variants: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a fatex.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FatexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if it exists, defaults otherwise. The flag reports
    /// whether a manifest was found.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FatexError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check fatex.yaml syntax".to_string()),
        })
    }

    /// The builtin catalog with this manifest's variant overrides applied.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::builtin()
            .with_overrides(&self.variants)
            .map_err(|message| FatexError::Parse {
                message,
                help: Some("Check the `variants` section of fatex.yaml".to_string()),
            })
    }
}
