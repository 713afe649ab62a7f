//! Metadata loader - parses icon metadata files into records.
//!
//! Accepts the `icons.yml` / `icons.json` files shipped with a release:
//! a mapping from slug to an object with `label`, `unicode` and `styles`.
//! Other fields (`search`, `changes`, ...) are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FatexError, Result};
use crate::types::IconRecord;

/// A YAML scalar that may have been typed as a number (`label: 42`, `unicode: 30`).
///
/// Plain digit runs keep their digits. Floats are only accepted for labels.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    label: Option<Scalar>,
    unicode: Option<Scalar>,
    styles: Option<Vec<String>>,
}

/// Load a metadata file, choosing the parser from its extension.
pub fn load_metadata(path: &Path) -> Result<Vec<IconRecord>> {
    let source = fs::read_to_string(path).map_err(|e| FatexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read metadata: {}", e),
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => parse_metadata_yaml(&source),
        Some("json") => parse_metadata_json(&source),
        _ => Err(FatexError::Parse {
            message: format!("Unsupported metadata file: {}", path.display()),
            help: Some("Use an icons.yml or icons.json file".to_string()),
        }),
    }
}

/// Parse YAML metadata. Records are returned sorted by slug.
pub fn parse_metadata_yaml(source: &str) -> Result<Vec<IconRecord>> {
    let document: serde_yaml::Value = serde_yaml::from_str(source).map_err(|e| FatexError::Parse {
        message: format!("Invalid metadata YAML: {}", e),
        help: None,
    })?;

    let mapping = match document {
        serde_yaml::Value::Mapping(mapping) => mapping,
        serde_yaml::Value::Null => return Ok(Vec::new()),
        _ => return Err(not_a_mapping()),
    };

    // Slugs such as `0` or `42` come through as numbers
    let mut raw = BTreeMap::new();
    for (key, value) in mapping {
        let slug = match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            other => {
                return Err(FatexError::Parse {
                    message: format!("Invalid icon key: {:?}", other),
                    help: None,
                })
            }
        };
        let record: RawRecord =
            serde_yaml::from_value(value).map_err(|e| FatexError::MalformedRecord {
                slug: slug.clone(),
                message: e.to_string(),
            })?;
        raw.insert(slug, record);
    }

    into_records(raw)
}

/// Parse JSON metadata. Records are returned sorted by slug.
pub fn parse_metadata_json(source: &str) -> Result<Vec<IconRecord>> {
    let document: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(source).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => not_a_mapping(),
            _ => FatexError::Parse {
                message: format!("Invalid metadata JSON: {}", e),
                help: None,
            },
        })?;

    let mut raw = BTreeMap::new();
    for (slug, value) in document {
        let record: RawRecord =
            serde_json::from_value(value).map_err(|e| FatexError::MalformedRecord {
                slug: slug.clone(),
                message: e.to_string(),
            })?;
        raw.insert(slug, record);
    }

    into_records(raw)
}

/// Validate raw records. The first malformed record fails the whole load.
fn into_records(raw: BTreeMap<String, RawRecord>) -> Result<Vec<IconRecord>> {
    raw.into_iter()
        .map(|(slug, record)| {
            let malformed = |message: String| FatexError::MalformedRecord {
                slug: slug.clone(),
                message,
            };

            let label = record
                .label
                .map(|l| l.to_string())
                .filter(|l| !l.trim().is_empty())
                .ok_or_else(|| malformed("missing label".to_string()))?;

            // A float has lost the text it was written as (`1e03` reads as 1000)
            let codepoint = match record.unicode {
                Some(Scalar::Float(value)) => {
                    return Err(malformed(format!(
                        "unicode was read as the number {:e}; quote the value in the metadata file",
                        value
                    )))
                }
                Some(unicode) => unicode.to_string(),
                None => return Err(malformed("missing unicode".to_string())),
            };
            if !IconRecord::is_valid_codepoint(&codepoint) {
                return Err(malformed(format!("invalid unicode value '{}'", codepoint)));
            }

            let styles = record.styles.unwrap_or_default();
            if styles.is_empty() {
                return Err(malformed("no styles".to_string()));
            }

            Ok(IconRecord {
                slug,
                label,
                codepoint,
                styles,
            })
        })
        .collect()
}

fn not_a_mapping() -> FatexError {
    FatexError::Parse {
        message: "Metadata must be a mapping of icon names to records".to_string(),
        help: Some("Expected `slug: { label, unicode, styles }` entries".to_string()),
    }
}
