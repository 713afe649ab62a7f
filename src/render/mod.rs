//! Rendering module for fatex.
//!
//! This module turns assembled icon lists into render contexts and renders
//! them into LaTeX package files.

mod context;
mod templates;

pub use context::{build_context, BuildInfo, PackageRenderContext};
pub use templates::{Artifact, Renderer, TemplateKind};
