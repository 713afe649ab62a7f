//! Core domain types for fatex.
//!
//! - `IconRecord` - one glyph from the metadata corpus
//! - `Style` / `Family` - visual treatments and licensing tiers
//! - `PackageVariant` / `Catalog` - the output packages and their decoration
//! - `IconDescriptor` - a record prepared for one package variant

mod icon;
mod record;
mod style;
mod variant;

pub use icon::IconDescriptor;
pub use record::IconRecord;
pub use style::{Family, Style};
pub use variant::{Catalog, PackageVariant, VariantOverride};
