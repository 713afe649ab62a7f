//! fatex - Font Awesome to LaTeX package generator
//!
//! Turns the icon metadata of a Font Awesome desktop release into LaTeX
//! packages: one style definitions file and one macro definitions file per
//! package variant, with every icon label normalized into a TeX-safe macro
//! name.

pub mod assemble;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use assemble::{assemble, Assembly, SkipReport, SkippedStyle};
pub use discovery::{discover_release, load_metadata, Manifest, Release};
pub use error::{FatexError, Result};
pub use normalize::normalize;
pub use render::{build_context, Artifact, BuildInfo, PackageRenderContext, Renderer, TemplateKind};
pub use types::{Catalog, Family, IconDescriptor, IconRecord, PackageVariant, Style, VariantOverride};
pub use validation::{validate_assembly, Diagnostic, Severity, ValidationResult};
